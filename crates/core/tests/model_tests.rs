// ═══════════════════════════════════════════════════════════════════
// Model Tests: form values, chart payload decoding, chat, wallet, survey
// ═══════════════════════════════════════════════════════════════════

use portfolio_dashboard_core::errors::FetchError;
use portfolio_dashboard_core::models::chart::{Candle, ChartPayload, ChartQuery, ChartRecord};
use portfolio_dashboard_core::models::chat::{ChatMessage, Role};
use portfolio_dashboard_core::models::dropdown::DropdownOptions;
use portfolio_dashboard_core::models::form::{is_digits_only, Algorithm, FormField, FormParameters, Period};
use portfolio_dashboard_core::models::survey::{
    Experience, Horizon, RiskLevel, SurveySubmission, Theme,
};
use portfolio_dashboard_core::models::view::WalletView;
use portfolio_dashboard_core::models::wallet::WalletAccount;

// ── Period ──────────────────────────────────────────────────────────

mod period {
    use super::*;

    #[test]
    fn parses_form_codes() {
        assert_eq!("D".parse::<Period>().unwrap(), Period::Day);
        assert_eq!("4h".parse::<Period>().unwrap(), Period::FourHour);
        assert_eq!("15m".parse::<Period>().unwrap(), Period::FifteenMin);
    }

    #[test]
    fn parses_granularity_names() {
        assert_eq!("day".parse::<Period>().unwrap(), Period::Day);
        assert_eq!("month".parse::<Period>().unwrap(), Period::Month);
        assert_eq!("5min".parse::<Period>().unwrap(), Period::FiveMin);
    }

    #[test]
    fn rejects_unknown() {
        assert!("daily".parse::<Period>().is_err());
        assert!("".parse::<Period>().is_err());
    }

    #[test]
    fn every_period_maps_both_ways() {
        for p in Period::ALL {
            assert_eq!(p.form_code().parse::<Period>().unwrap(), p);
            assert_eq!(p.granularity().parse::<Period>().unwrap(), p);
        }
    }

    #[test]
    fn serializes_as_form_code_and_accepts_granularity() {
        assert_eq!(serde_json::to_string(&Period::Hour).unwrap(), "\"1h\"");
        let p: Period = serde_json::from_str("\"4hour\"").unwrap();
        assert_eq!(p, Period::FourHour);
    }
}

// ── Form parameters ─────────────────────────────────────────────────

mod form {
    use super::*;

    #[test]
    fn digits_only() {
        assert!(is_digits_only(""));
        assert!(is_digits_only("0"));
        assert!(is_digits_only("0042"));
        assert!(!is_digits_only("4 2"));
        assert!(!is_digits_only("1e3"));
        assert!(!is_digits_only("abc"));
    }

    #[test]
    fn numeric_fields() {
        assert!(FormField::Limit.is_numeric());
        assert!(FormField::Lookback.is_numeric());
        assert!(FormField::Rebalance.is_numeric());
        assert!(!FormField::Period.is_numeric());
        assert!(!FormField::Algorithm.is_numeric());
    }

    #[test]
    fn default_serializes_to_submit_body() {
        let json = serde_json::to_value(FormParameters::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "period": "D",
                "limit": "100",
                "lookback": "10",
                "rebalance": "1",
                "algorithm": "mvo"
            })
        );
    }

    #[test]
    fn algorithm_labels() {
        assert_eq!(Algorithm::Mvo.label(), "MVO");
        assert_eq!(Algorithm::Hrp.label(), "HRP");
        assert_eq!("hrp".parse::<Algorithm>().unwrap(), Algorithm::Hrp);
        assert!("HRP".parse::<Algorithm>().is_err());
    }
}

// ── Chart payload decoding ──────────────────────────────────────────

mod chart_payload {
    use super::*;

    const CANDLES: &str = r#"[{"time":1704067200000,"open":1.0,"high":2.0,"low":0.5,"close":1.5}]"#;

    #[test]
    fn decodes_plain_candle_array() {
        let payload = ChartPayload::decode(CANDLES).unwrap();
        match payload {
            ChartPayload::Candles(c) => {
                assert_eq!(c.len(), 1);
                assert_eq!(c[0].close, 1.5);
            }
            other => panic!("expected candles, got {other:?}"),
        }
    }

    #[test]
    fn unwraps_json_encoded_string() {
        let wrapped = serde_json::to_string(CANDLES).unwrap();
        assert!(wrapped.starts_with('"'));
        let payload = ChartPayload::decode(&wrapped).unwrap();
        assert!(matches!(payload, ChartPayload::Candles(ref c) if c.len() == 1));
    }

    #[test]
    fn backend_error_object_is_an_error() {
        let body = r#"{"symbol":"XYZ","period":"day","limit":100,"error":"Symbol XYZ not found"}"#;
        let err = ChartPayload::decode(body).unwrap_err();
        assert_eq!(err, FetchError::Backend("Symbol XYZ not found".into()));
    }

    #[test]
    fn image_sources() {
        let quoted = "\"data:image/png;base64,AAAA\"";
        assert_eq!(
            ChartPayload::decode(quoted).unwrap(),
            ChartPayload::Image("data:image/png;base64,AAAA".into())
        );
        assert_eq!(
            ChartPayload::decode("https://charts.example/eth.png").unwrap(),
            ChartPayload::Image("https://charts.example/eth.png".into())
        );
    }

    #[test]
    fn anything_else_is_text() {
        assert_eq!(
            ChartPayload::decode("hello").unwrap(),
            ChartPayload::Text("hello".into())
        );
        assert!(ChartPayload::decode("").unwrap().is_empty());
    }

    #[test]
    fn non_candle_array_is_kept_as_json() {
        assert_eq!(
            ChartPayload::decode("[1,2,3]").unwrap(),
            ChartPayload::Json(serde_json::json!([1, 2, 3]))
        );
    }

    #[test]
    fn null_priced_candles_are_kept_as_json() {
        let records = r#"[{"time":1704067200000,"open":null,"high":2.0,"low":0.5,"close":1.5}]"#;
        let body = serde_json::to_string(records).unwrap();
        match ChartPayload::decode(&body).unwrap() {
            ChartPayload::Json(value) => {
                assert!(value[0]["open"].is_null());
                assert_eq!(value[0]["close"], 1.5);
            }
            other => panic!("expected json, got {other:?}"),
        }
    }

    #[test]
    fn text_keeps_surrounding_whitespace() {
        assert_eq!(
            ChartPayload::decode("  body\n").unwrap(),
            ChartPayload::Text("  body\n".into())
        );
    }

    #[test]
    fn unterminated_string_is_kept_as_text() {
        assert_eq!(
            ChartPayload::decode("\"[1,2").unwrap(),
            ChartPayload::Text("\"[1,2".into())
        );
    }

    #[test]
    fn empty_json_is_empty() {
        assert!(ChartPayload::decode("{}").unwrap().is_empty());
        assert!(!ChartPayload::decode("[0]").unwrap().is_empty());
    }

    #[test]
    fn empty_candle_list_is_empty() {
        assert!(ChartPayload::decode("[]").unwrap().is_empty());
    }
}

mod chart_record {
    use super::*;

    #[test]
    fn id_and_title_follow_symbol() {
        let rec = ChartRecord::for_symbol("ETH", ChartPayload::Text("x".into()));
        assert_eq!(rec.id, "ETH-price");
        assert_eq!(rec.title, "ETH Price");
    }

    #[test]
    fn candle_date_label() {
        let c = Candle {
            time: 1_704_067_200_000,
            open: 0.0,
            high: 0.0,
            low: 0.0,
            close: 0.0,
        };
        assert_eq!(c.date_label(), "2024-01-01");
    }

    #[test]
    fn query_new() {
        let q = ChartQuery::new("BTC", Period::Week, "50");
        assert_eq!(q.symbol, "BTC");
        assert_eq!(q.period, Period::Week);
        assert_eq!(q.limit, "50");
    }
}

// ── Chat / Dropdown ─────────────────────────────────────────────────

#[test]
fn chat_message_roles_serialize_lowercase() {
    let json = serde_json::to_value(ChatMessage::user("hi")).unwrap();
    assert_eq!(json, serde_json::json!({"role": "user", "content": "hi"}));
    assert_eq!(ChatMessage::assistant("yo").role, Role::Assistant);
}

#[test]
fn dropdown_options_parse_and_lookup() {
    let opts: DropdownOptions =
        serde_json::from_str(r#"{"dropdown1":["ETH","BTC"],"dropdown2":["a"]}"#).unwrap();
    assert_eq!(opts.symbols(), &["ETH".to_string(), "BTC".to_string()]);
    assert!(opts.contains_symbol("BTC"));
    assert!(!opts.contains_symbol("DOGE"));
}

#[test]
fn dropdown_options_missing_list_defaults_empty() {
    let opts: DropdownOptions = serde_json::from_str(r#"{"dropdown1":["ETH"]}"#).unwrap();
    assert!(opts.dropdown2.is_empty());
}

// ── Wallet ──────────────────────────────────────────────────────────

mod wallet {
    use super::*;

    #[test]
    fn short_label_of_full_address() {
        let acc = WalletAccount::new("0x1234567890abcdef1234567890abcdef12345678");
        assert_eq!(acc.short_label(), "0x1234...5678");
    }

    #[test]
    fn short_label_of_short_address_has_empty_tail() {
        let acc = WalletAccount::new("0xabc");
        assert_eq!(acc.short_label(), "0xabc...");
    }

    #[test]
    fn button_text() {
        assert_eq!(WalletView::NotInstalled.button_text(), "MetaMask not installed!");
        assert_eq!(WalletView::Disconnected.button_text(), "Connect to MetaMask");
        assert_eq!(
            WalletView::Connected {
                label: "0x1234...5678".into()
            }
            .button_text(),
            "Connected: 0x1234...5678"
        );
    }
}

// ── Survey ──────────────────────────────────────────────────────────

mod survey {
    use super::*;

    fn sample() -> SurveySubmission {
        SurveySubmission {
            risk_level: RiskLevel::WaitItOut,
            horizon: Horizon::Years,
            themes: vec![Theme::Eth, Theme::Defi],
            exclusions: vec![],
            experience: Experience::Dabbled,
            notes: String::new(),
        }
    }

    #[test]
    fn serializes_answer_strings() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["risk_level"], "I'd be worried but wait it out");
        assert_eq!(json["horizon"], "A few years");
        assert_eq!(json["themes"], serde_json::json!(["eth", "defi"]));
        assert_eq!(json["experience"], "I've dabbled");
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{
            "risk_level": "I'd panic and sell everything",
            "horizon": "A few weeks",
            "themes": [],
            "experience": "I'm new"
        }"#;
        let s: SurveySubmission = serde_json::from_str(json).unwrap();
        assert!(s.themes.is_empty());
        assert!(s.exclusions.is_empty());
        assert!(s.notes.is_empty());
    }
}
