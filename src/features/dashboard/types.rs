use serde::Deserialize;
use serde_json::Number;
use std::fmt;

/// Answer of `GET /dashboard/stats/`. Every section is optional so a partial
/// payload still renders.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DashboardStats {
    #[serde(default)]
    pub cards: Cards,
    #[serde(default)]
    pub grafico_logins_por_hora: Option<LoginChart>,
    #[serde(default)]
    pub tabela_status_conexao: Vec<ConnectionStatus>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Cards {
    #[serde(default)]
    pub logins_hoje: Option<CardValue>,
    #[serde(default)]
    pub alertas_ativos: Option<CardValue>,
    #[serde(default)]
    pub dispositivos_conectados: Option<CardValue>,
    #[serde(default)]
    pub ultimo_evento: Option<CardValue>,
}

impl Cards {
    /// Card titles paired with their values, in display order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, Option<&CardValue>); 4] {
        [
            ("Logins today", self.logins_hoje.as_ref()),
            ("Active alerts", self.alertas_ativos.as_ref()),
            ("Connected devices", self.dispositivos_conectados.as_ref()),
            ("Last event", self.ultimo_evento.as_ref()),
        ]
    }
}

/// A stat card shows either a count or a label such as a timestamp.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CardValue {
    Number(Number),
    Text(String),
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Logins per hour; `labels[i]` pairs with `data[i]`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct LoginChart {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub data: Vec<Number>,
}

impl LoginChart {
    #[must_use]
    pub fn points(&self) -> Vec<(&str, &Number)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.data.iter())
            .collect()
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ConnectionStatus {
    #[serde(default)]
    pub nome_usuario: String,
    #[serde(default)]
    pub status: String,
}

impl ConnectionStatus {
    /// The backend marks online users with `Ativo`.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == "Ativo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stats_decode_mixed_card_values() -> Result<(), serde_json::Error> {
        let stats: DashboardStats = serde_json::from_value(json!({
            "cards": {
                "logins_hoje": 42,
                "alertas_ativos": 3,
                "dispositivos_conectados": "17",
                "ultimo_evento": "08:15"
            },
            "grafico_logins_por_hora": {"labels": ["08h", "09h"], "data": [4, 9]},
            "tabela_status_conexao": [
                {"nome_usuario": "ada", "status": "Ativo"},
                {"nome_usuario": "bob", "status": "Inativo"}
            ]
        }))?;

        let rendered: Vec<String> = stats
            .cards
            .entries()
            .iter()
            .map(|(_, value)| value.map(ToString::to_string).unwrap_or_default())
            .collect();
        assert_eq!(rendered, vec!["42", "3", "17", "08:15"]);

        let chart = stats.grafico_logins_por_hora.clone().unwrap_or_default();
        assert_eq!(chart.points().len(), 2);
        assert_eq!(chart.points()[1].0, "09h");

        assert!(stats.tabela_status_conexao[0].is_active());
        assert!(!stats.tabela_status_conexao[1].is_active());
        Ok(())
    }

    #[test]
    fn empty_stats_decode() -> Result<(), serde_json::Error> {
        let stats: DashboardStats = serde_json::from_value(json!({}))?;
        assert_eq!(stats, DashboardStats::default());
        assert!(stats.cards.entries().iter().all(|(_, v)| v.is_none()));
        Ok(())
    }
}
