use serde::{Deserialize, Serialize};

/// One action from `/Matters/{id}/Histories`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MatterHistory {
    pub matter_history_action_name: Option<String>,

    pub matter_history_action_text: Option<String>,

    pub matter_history_mover_name: Option<String>,

    pub matter_history_passed_flag_name: Option<String>,

    pub matter_history_seconder_name: Option<String>,
}
