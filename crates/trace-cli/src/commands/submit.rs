use serde::Serialize;
use trace_core::catalog::trace_url;
use trace_core::responses::SubmissionResult;
use trace_intake::HarvestForm;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SubmitArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Submission result plus the trace link a farmer would print as a code.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitOutput {
    #[serde(flatten)]
    result: SubmissionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_url: Option<String>,
}

impl SubmitOutput {
    fn new(result: SubmissionResult, base_url: &str) -> Self {
        let trace_url = result
            .produce_id
            .as_deref()
            .filter(|_| result.success)
            .map(|id| trace_url(base_url, id));
        Self { result, trace_url }
    }
}

/// Handle `harvest submit`. A rejected submission is still a normal
/// outcome and exits zero.
pub async fn handle(args: &SubmitArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let form = HarvestForm::new(&args.crop_name, &args.harvest_date, &args.quality_metrics);

    let progress = Progress::spinner("Validating harvest data...");
    let result = ctx.submissions.submit(&form).await;
    if result.success {
        progress.finish_ok("Harvest validated");
    } else {
        progress.finish_clear();
    }

    output(&SubmitOutput::new(result, &ctx.config.general.trace_base_url), flags.format)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn success_carries_trace_url() {
        let result = SubmissionResult::succeeded("ok", "prod-1".into());
        let value = serde_json::to_value(SubmitOutput::new(result, "/trace/")).unwrap();
        assert_eq!(value["traceUrl"], "/trace/prod-1");
        assert_eq!(value["produceId"], "prod-1");
        assert_eq!(value["success"], true);
    }

    #[test]
    fn failure_has_no_trace_url() {
        let result = SubmissionResult::failed("bad", Some(vec!["x".into()]));
        let value = serde_json::to_value(SubmitOutput::new(result, "/trace")).unwrap();
        assert!(value.get("traceUrl").is_none());
        assert_eq!(value["errors"][0], "x");
    }
}
