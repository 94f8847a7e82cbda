use crate::features::listing::cell;
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Alert {
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub usuario_email: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub horario: Option<String>,
}

impl Alert {
    pub const COLUMNS: [&'static str; 4] = ["Description", "User", "Date", "Time"];

    #[must_use]
    pub fn row(&self) -> [String; 4] {
        [
            cell(self.descricao.as_deref()),
            cell(self.usuario_email.as_deref()),
            cell(self.data.as_deref()),
            cell(self.horario.as_deref()),
        ]
    }
}
