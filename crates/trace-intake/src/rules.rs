//! Reading field-rule failures off a `garde` report.

use garde::Validate;

/// Top-level fields of `form` that break a declared `#[garde(...)]` rule.
pub(crate) fn failed_fields<T>(form: &T) -> Vec<String>
where
    T: Validate,
    T::Context: Default,
{
    match form.validate() {
        Ok(()) => Vec::new(),
        Err(report) => report.iter().map(|(path, _)| path.to_string()).collect(),
    }
}

pub(crate) fn has_failed(failed: &[String], field: &str) -> bool {
    failed.iter().any(|name| name == field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventForm;
    use pretty_assertions::assert_eq;
    use trace_core::enums::StakeholderRole;

    #[test]
    fn reports_fields_in_declaration_order() {
        let form = EventForm {
            role: StakeholderRole::Retailer,
            location: String::new(),
            status: String::new(),
            price: Some("not checked here".into()),
        };
        let failed = failed_fields(&form);
        assert_eq!(failed, vec!["location".to_string(), "status".to_string()]);
        assert!(has_failed(&failed, "status"));
        assert!(!has_failed(&failed, "price"));
    }

    #[test]
    fn passing_form_reports_nothing() {
        let form = EventForm {
            role: StakeholderRole::Distributor,
            location: "Warehouse".into(),
            status: "In Transit".into(),
            price: None,
        };
        assert!(failed_fields(&form).is_empty());
    }
}
