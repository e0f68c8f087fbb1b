use contracts::domain::a001_metric::aggregate::{Metric, MetricPayload};

use crate::shared::date_utils::date_input_value;
use crate::shared::list_controller::{EntityMessages, ListEntity};
use crate::shared::list_utils::Searchable;

/// Metric form fields as typed; `value` is parsed on submit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricForm {
    pub name: String,
    pub value: String,
    pub date: String,
}

impl Searchable for Metric {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl ListEntity for Metric {
    type Form = MetricForm;
    type Payload = MetricPayload;

    const RESOURCE: &'static str = "metrics";
    const MESSAGES: EntityMessages = EntityMessages {
        created: "Métrica creada",
        updated: "Métrica actualizada",
        deleted: "Métrica eliminada",
        load_failed: "Error al cargar métricas",
        save_failed: "Error al guardar métrica",
        delete_failed: "Error al eliminar métrica",
    };

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn to_form(&self) -> MetricForm {
        MetricForm {
            name: self.name.clone(),
            value: self.value.to_string(),
            date: date_input_value(&self.date),
        }
    }

    fn payload(form: &MetricForm) -> Result<MetricPayload, String> {
        let name = form.name.trim();
        if name.is_empty() {
            return Err("el nombre es obligatorio".to_string());
        }
        let value = form
            .value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| "el valor debe ser numérico".to_string())?;
        if form.date.is_empty() {
            return Err("la fecha es obligatoria".to_string());
        }

        Ok(MetricPayload {
            name: name.to_string(),
            value,
            date: form.date.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_controller::{Command, ListState};

    fn metric(id: &str, name: &str, value: f64, date: &str) -> Metric {
        Metric {
            id: Some(id.to_string()),
            tenant_id: None,
            name: name.to_string(),
            value,
            date: date.to_string(),
        }
    }

    #[test]
    fn test_form_prefill_truncates_date() {
        let form = metric("m1", "Metric 1", 10.5, "2025-09-01T00:00:00.000Z").to_form();
        assert_eq!(form.name, "Metric 1");
        assert_eq!(form.value, "10.5");
        assert_eq!(form.date, "2025-09-01");
    }

    #[test]
    fn test_create_metric_payload() {
        let mut state = ListState::<Metric>::default();
        state.form = MetricForm {
            name: "Metric 2".into(),
            value: "20".into(),
            date: "2025-09-15".into(),
        };

        let command = state.submit();
        assert_eq!(
            command,
            Some(Command::Create {
                payload: MetricPayload {
                    name: "Metric 2".into(),
                    value: 20.0,
                    date: "2025-09-15".into(),
                }
            })
        );
    }

    #[test]
    fn test_non_numeric_value_is_rejected_locally() {
        let mut state = ListState::<Metric>::default();
        state.form = MetricForm {
            name: "Metric 2".into(),
            value: "veinte".into(),
            date: "2025-09-15".into(),
        };

        assert_eq!(state.submit(), None);
        let notice = state.notice().expect("error notice");
        assert!(notice.message.starts_with("Error al guardar métrica"));
    }

    #[test]
    fn test_search_matches_name_only() {
        let m = metric("m1", "Usuarios activos", 3.0, "2025-09-01");
        assert!(m.matches_filter("activos"));
        assert!(!m.matches_filter("2025"));
    }
}
