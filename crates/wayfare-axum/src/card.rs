//! Agent card discovery document.
//!
//! A static capability card assembled against the deployment's base URL
//! and served read-only at the well-known path.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCard {
    pub name: String,
    pub description: String,
    pub url: String,
    pub version: String,
    pub default_input_modes: Vec<String>,
    pub default_output_modes: Vec<String>,
    pub capabilities: AgentCapabilities,
    pub skills: Vec<AgentSkill>,
    pub supported_interfaces: Vec<AgentInterface>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCapabilities {
    pub streaming: bool,
    pub push_notifications: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSkill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub examples: Vec<String>,
}

/// One protocol binding the agent is reachable over.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentInterface {
    pub protocol_binding: String,
    pub url: String,
}

/// The card for the travel agent, with `url` and the JSON-RPC interface
/// rewritten against the request's base URL.
pub fn travel_agent_card(base_url: &str) -> AgentCard {
    let rpc_url = format!("{}/v1", base_url.trim_end_matches('/'));
    AgentCard {
        name: "Wayfare Travel Agent".to_string(),
        description: "Travel agent providing comprehensive trip planning services \
                      including currency exchange and personalized activity planning."
            .to_string(),
        url: rpc_url.clone(),
        version: "1.0.0".to_string(),
        default_input_modes: vec!["text".to_string()],
        default_output_modes: vec!["text".to_string()],
        capabilities: AgentCapabilities {
            streaming: true,
            push_notifications: true,
        },
        skills: vec![AgentSkill {
            id: "trip_planning".to_string(),
            name: "Trip Planning".to_string(),
            description: "Handles comprehensive trip planning, including currency \
                          exchanges, itinerary creation, sightseeing, dining \
                          recommendations, and event bookings."
                .to_string(),
            tags: vec![
                "trip".to_string(),
                "planning".to_string(),
                "travel".to_string(),
                "currency".to_string(),
            ],
            examples: vec![
                "Plan a budget-friendly day trip to Seoul including currency exchange."
                    .to_string(),
                "What's the exchange rate and recommended itinerary for visiting Tokyo?"
                    .to_string(),
            ],
        }],
        supported_interfaces: vec![AgentInterface {
            protocol_binding: "JSON-RPC".to_string(),
            url: rpc_url,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_rewrites_urls_against_base() {
        let card = travel_agent_card("http://example.test:10020/");
        assert_eq!(card.url, "http://example.test:10020/v1");
        assert_eq!(card.supported_interfaces.len(), 1);
        assert_eq!(card.supported_interfaces[0].protocol_binding, "JSON-RPC");
        assert_eq!(card.supported_interfaces[0].url, "http://example.test:10020/v1");
    }

    #[test]
    fn card_advertises_streaming() {
        let card = travel_agent_card("http://localhost:10020");
        assert!(card.capabilities.streaming);
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["capabilities"]["pushNotifications"], true);
        assert_eq!(value["defaultInputModes"][0], "text");
    }
}
