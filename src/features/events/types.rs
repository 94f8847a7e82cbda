use crate::features::listing::cell;
use serde::Deserialize;

/// One row of the access event log.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Event {
    #[serde(default)]
    pub usuario_email: Option<String>,
    #[serde(default)]
    pub evento_desc: Option<String>,
    #[serde(default)]
    pub horario: Option<String>,
}

impl Event {
    pub const COLUMNS: [&'static str; 3] = ["User", "Event", "Time"];

    #[must_use]
    pub fn row(&self) -> [String; 3] {
        [
            cell(self.usuario_email.as_deref()),
            cell(self.evento_desc.as_deref()),
            cell(self.horario.as_deref()),
        ]
    }
}
