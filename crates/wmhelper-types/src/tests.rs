#[cfg(test)]
mod tests {
    use crate::api::*;
    use crate::message::*;
    use crate::scope::Scope;
    use crate::session::*;
    use crate::time::*;
    use crate::usage::*;
    use crate::user::UserContext;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::user("What is the scale tolerance?");
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.text, "What is the scale tolerance?");
    }

    #[test]
    fn test_message_ai() {
        let msg = Message::ai("Under HB 44...");
        assert_eq!(msg.sender, Sender::Ai);
    }

    #[test]
    fn test_sender_wire_names() {
        assert_eq!(
            serde_json::to_string(&Message::user("q")).unwrap(),
            r#"{"text":"q","sender":"user"}"#
        );
        assert_eq!(
            serde_json::to_string(&Message::ai("a")).unwrap(),
            r#"{"text":"a","sender":"ai"}"#
        );
    }

    #[test]
    fn test_message_roundtrip() {
        let msg = Message::ai("answer");
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    // ─── Scope Tests ─────────────────────────────────────────

    #[test]
    fn test_scope_wire_names_match_serde() {
        for scope in Scope::all() {
            let json = serde_json::to_string(scope).unwrap();
            assert_eq!(json, format!("\"{}\"", scope.wire_name()));
        }
    }

    #[test]
    fn test_scope_default_is_mass_laws() {
        assert_eq!(Scope::default(), Scope::MassLaws);
    }

    #[test]
    fn test_scope_labels_nonempty() {
        for scope in Scope::all() {
            assert!(!scope.label().is_empty());
        }
    }

    // ─── Wire Body Tests ─────────────────────────────────────

    #[test]
    fn test_query_request_new_session_serializes_null() {
        let req = QueryRequest {
            query: "pump accuracy".to_string(),
            scope: Scope::Hb44,
            user_id: "user_1".to_string(),
            session_id: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["scope"], "hb44");
        assert!(json["session_id"].is_null());
    }

    #[test]
    fn test_query_request_existing_session() {
        let req = QueryRequest {
            query: "q".to_string(),
            scope: Scope::MassLaws,
            user_id: "user_1".to_string(),
            session_id: Some(42),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["session_id"], 42);
    }

    #[test]
    fn test_session_list_defaults_to_empty() {
        let list: SessionList = serde_json::from_str("{}").unwrap();
        assert!(list.sessions.is_empty());
    }

    #[test]
    fn test_session_meta_decodes() {
        let json = r#"{"sessions":[{"id":7,"title":"Scale rules","created_at":"2026-03-01T10:00:00Z","updated_at":"2026-03-02T10:00:00Z"}]}"#;
        let list: SessionList = serde_json::from_str(json).unwrap();
        assert_eq!(list.sessions.len(), 1);
        assert_eq!(list.sessions[0].id, 7);
        assert_eq!(list.sessions[0].title, "Scale rules");
    }

    #[test]
    fn test_checkout_session_wire_name() {
        let json = r#"{"checkoutUrl":"https://checkout.example/cs_123"}"#;
        let checkout: CheckoutSession = serde_json::from_str(json).unwrap();
        assert_eq!(checkout.checkout_url, "https://checkout.example/cs_123");
    }

    #[test]
    fn test_tier_change_request_wire_names() {
        let req = TierChangeRequest {
            user_id: "user_1".to_string(),
            tier: Tier::Paid,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["tier"], "paid");
    }

    // ─── Usage Tests ─────────────────────────────────────────

    #[test]
    fn test_usage_percent_clamped() {
        let counters = UsageCounters {
            daily: 120,
            daily_limit: 50,
            ..Default::default()
        };
        assert_eq!(counters.daily_percent(), 100.0);
    }

    #[test]
    fn test_usage_percent_partial() {
        let counters = UsageCounters {
            monthly: 250,
            monthly_limit: 500,
            ..Default::default()
        };
        assert_eq!(counters.monthly_percent(), 50.0);
    }

    #[test]
    fn test_usage_percent_zero_limit() {
        let counters = UsageCounters::default();
        assert_eq!(counters.daily_percent(), 0.0);
        assert_eq!(counters.monthly_percent(), 0.0);
    }

    #[test]
    fn test_usage_warning_threshold() {
        let counters = UsageCounters {
            daily: 41,
            daily_limit: 50,
            monthly: 400,
            monthly_limit: 500,
            ..Default::default()
        };
        assert!(counters.daily_warning());
        assert!(!counters.monthly_warning());
    }

    #[test]
    fn test_usage_data_decodes() {
        let json = r#"{
            "user_id": "user_1",
            "subscription_tier": "free",
            "subscription_end_date": null,
            "usage": {"daily": 1, "daily_limit": 2, "monthly": 3, "monthly_limit": 6, "total": 9},
            "recent_queries": [
                {"query": "pricing fines", "scope": "mass_laws", "tokens_used": 512, "created_at": "2026-03-01T09:30:00Z"}
            ]
        }"#;
        let data: UsageData = serde_json::from_str(json).unwrap();
        assert_eq!(data.subscription_tier, Tier::Free);
        assert_eq!(data.usage.total, 9);
        assert_eq!(data.recent_queries.len(), 1);
        assert_eq!(data.recent_queries[0].scope, "mass_laws");
    }

    #[test]
    fn test_tier_perks_present() {
        for tier in Tier::all() {
            assert!(!tier.perks().is_empty());
            assert!(!tier.label().is_empty());
            assert!(!tier.price().is_empty());
        }
    }

    // ─── Time / User Tests ───────────────────────────────────

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2026-03-04T10:00:00Z")), "Mar 04, 2026");
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some("garbage")), "garbage");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("2026-03-04T14:07:00Z"), "14:07");
    }

    #[test]
    fn test_user_display_name_fallbacks() {
        let mut user = UserContext::new("user_abc");
        assert_eq!(user.display_name(), "user_abc");
        user.email = Some("inspector@example.com".to_string());
        assert_eq!(user.display_name(), "inspector@example.com");
        user.name = Some("Pat Rivera".to_string());
        assert_eq!(user.display_name(), "Pat Rivera");
    }

    #[test]
    fn test_new_session_sentinel_is_zero() {
        assert_eq!(NEW_SESSION_ID, 0);
    }
}
