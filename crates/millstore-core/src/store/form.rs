use crate::ledger::IntakeTransaction;
use serde::Deserialize;

/// An intake submission as posted by the intake page.
///
/// Field names follow the page's JSON keys; the aliases accept the labels of
/// the original form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntakeForm {
    #[serde(alias = "日期")]
    pub date: String,
    #[serde(alias = "輸入原物料")]
    pub material: String,
    #[serde(alias = "廠商名稱")]
    pub vendor: String,
    #[serde(alias = "乾燥度")]
    pub dryness: String,
    #[serde(alias = "等級")]
    pub grade: String,
    #[serde(alias = "料桶")]
    pub bin_label: String,
    #[serde(alias = "總重")]
    pub total_weight: String,
    #[serde(alias = "容量")]
    pub capacity: String,
    #[serde(alias = "初估碾米率")]
    pub est_rate: String,
    #[serde(alias = "備註")]
    pub note: String,
    pub position_name: Option<String>,
}

impl IntakeForm {
    pub fn to_transaction(&self) -> IntakeTransaction {
        IntakeTransaction {
            received_at: None,
            date: self.date.clone(),
            material_input: self.material.clone(),
            vendor_name: self.vendor.clone(),
            dryness: self.dryness.clone(),
            grade: self.grade.clone(),
            bin_label: self.bin_label.clone(),
            total_weight: self.total_weight.clone(),
            capacity: self.capacity.clone(),
            estimated_mill_rate: self.est_rate.clone(),
            note: self.note.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_original_form_labels() {
        let form: IntakeForm = serde_json::from_str(
            r#"{"日期":"2024-10-01","輸入原物料":"糙米","料桶":"C-07","positionName":"2-3"}"#,
        )
        .unwrap();
        assert_eq!(form.date, "2024-10-01");
        assert_eq!(form.material, "糙米");
        assert_eq!(form.bin_label, "C-07");
        assert_eq!(form.position_name.as_deref(), Some("2-3"));
        assert_eq!(form.vendor, "");
    }

    #[test]
    fn maps_onto_transaction() {
        let form = IntakeForm {
            est_rate: "0.7".into(),
            vendor: "王記".into(),
            ..Default::default()
        };
        let tx = form.to_transaction();
        assert_eq!(tx.estimated_mill_rate, "0.7");
        assert_eq!(tx.vendor_name, "王記");
        assert!(tx.received_at.is_none());
    }
}
