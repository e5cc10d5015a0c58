use std::collections::BTreeSet;
use std::fmt;

use crate::model::EntityId;
use crate::remote::{AdapterError, ExecutionAdapter, ExecutionReport, ExecutionRequest};

/// A concrete flow shape: an ordered step list plus per-step gating over
/// the current selection. The final step is always the execution step.
pub trait Flow {
    type Step: Copy + Eq + fmt::Debug;

    fn steps(&self) -> &[Self::Step];

    /// Whether the transition out of `step` is currently permitted.
    fn gate(&self, step: Self::Step, selected: &BTreeSet<EntityId>) -> bool;
}

/// Category filter narrowing candidate lists. The filter is a view concern;
/// it never touches the selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SourceFilter {
    #[default]
    All,
    Category(String),
}

impl SourceFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            SourceFilter::All => true,
            SourceFilter::Category(name) => name == category,
        }
    }
}

#[derive(Debug)]
pub enum WizardError {
    /// A second execution was requested while one is outstanding.
    ConcurrentExecution,
    /// Execution was requested from a step it is not allowed from.
    NotExecutable,
    /// The adapter reported failure; progress stays below 100.
    Adapter(AdapterError),
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardError::ConcurrentExecution => f.write_str("execution already in progress"),
            WizardError::NotExecutable => f.write_str("flow is not ready to execute"),
            WizardError::Adapter(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for WizardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WizardError::Adapter(err) => Some(err),
            _ => None,
        }
    }
}

/// Step-gated selection machine driving one flow from its first step
/// through a single execution.
///
/// The machine is terminal after one completed execution, successful or
/// not; running again means constructing a new wizard.
pub struct SelectionWizard<F: Flow> {
    flow: F,
    step_idx: usize,
    source_filter: SourceFilter,
    selected: BTreeSet<EntityId>,
    executing: bool,
    progress: u8,
    completed: bool,
    report: Option<ExecutionReport>,
}

impl<F: Flow> SelectionWizard<F> {
    pub fn new(flow: F) -> Self {
        Self {
            flow,
            step_idx: 0,
            source_filter: SourceFilter::All,
            selected: BTreeSet::new(),
            executing: false,
            progress: 0,
            completed: false,
            report: None,
        }
    }

    pub fn step(&self) -> F::Step {
        self.flow.steps()[self.step_idx]
    }

    pub fn flow(&self) -> &F {
        &self.flow
    }

    /// Flow data entry (settings, source lists). Gates re-evaluate on the
    /// next transition, so edits here cannot skip a check.
    pub fn flow_mut(&mut self) -> &mut F {
        &mut self.flow
    }

    pub fn source_filter(&self) -> &SourceFilter {
        &self.source_filter
    }

    pub fn selected(&self) -> &BTreeSet<EntityId> {
        &self.selected
    }

    pub fn is_selected(&self, id: &EntityId) -> bool {
        self.selected.contains(id)
    }

    pub fn is_executing(&self) -> bool {
        self.executing
    }

    /// 0 until an execution succeeds, then 100. A completed wizard with
    /// progress below 100 is the retry signal.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn report(&self) -> Option<&ExecutionReport> {
        self.report.as_ref()
    }

    fn at_terminal_step(&self) -> bool {
        self.step_idx + 1 == self.flow.steps().len()
    }

    /// Moves to the next step when the current step's gate passes.
    /// Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        if self.executing || self.completed {
            return false;
        }
        let steps = self.flow.steps();
        if self.step_idx + 1 >= steps.len() {
            return false;
        }
        if !self.flow.gate(steps[self.step_idx], &self.selected) {
            return false;
        }
        self.step_idx += 1;
        true
    }

    /// Moves to the previous step. Returns whether the step changed.
    pub fn retreat(&mut self) -> bool {
        if self.executing || self.completed || self.step_idx == 0 {
            return false;
        }
        self.step_idx -= 1;
        true
    }

    /// Flips membership of `id` in the selection. Ignored while executing,
    /// completed, or on the execution step. Returns whether it applied.
    pub fn toggle_select(&mut self, id: &EntityId) -> bool {
        if self.executing || self.completed || self.at_terminal_step() {
            return false;
        }
        if !self.selected.remove(id) {
            self.selected.insert(id.clone());
        }
        true
    }

    /// Replaces the category filter. The selection is left as-is, so ids
    /// hidden by the filter remain selected.
    pub fn filter_by(&mut self, filter: SourceFilter) {
        if self.executing || self.completed {
            return;
        }
        self.source_filter = filter;
    }

    /// Starts an execution: enters the execution step and marks the machine
    /// in-flight. Allowed from the last pre-execution step (or from the
    /// execution step itself, reached via `advance`) while that step's gate
    /// still passes.
    pub fn begin_execute(&mut self) -> Result<(), WizardError> {
        if self.executing {
            return Err(WizardError::ConcurrentExecution);
        }
        if self.completed {
            return Err(WizardError::NotExecutable);
        }
        let steps = self.flow.steps();
        let exec_idx = steps.len() - 1;
        if exec_idx == 0 {
            return Err(WizardError::NotExecutable);
        }
        if self.step_idx + 1 != exec_idx && self.step_idx != exec_idx {
            return Err(WizardError::NotExecutable);
        }
        if !self.flow.gate(steps[exec_idx - 1], &self.selected) {
            return Err(WizardError::NotExecutable);
        }
        self.step_idx = exec_idx;
        self.executing = true;
        self.progress = 0;
        Ok(())
    }

    /// Completes an execution started with `begin_execute`. Success stores
    /// the report and sets progress to 100; failure leaves progress where
    /// it was. Either way the wizard is terminal afterwards.
    pub fn finish_execute(
        &mut self,
        outcome: Result<ExecutionReport, AdapterError>,
    ) -> Result<&ExecutionReport, AdapterError> {
        self.executing = false;
        self.completed = true;
        match outcome {
            Ok(report) => {
                self.progress = 100;
                Ok(self.report.insert(report))
            }
            Err(err) => Err(err),
        }
    }

    /// Single-shot execution: exactly one adapter call per wizard run.
    pub fn execute<A>(
        &mut self,
        adapter: &A,
        request: &ExecutionRequest,
    ) -> Result<&ExecutionReport, WizardError>
    where
        A: ExecutionAdapter + ?Sized,
    {
        self.begin_execute()?;
        let outcome = adapter.execute(request);
        self.finish_execute(outcome).map_err(WizardError::Adapter)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::remote::ExecutionOutcome;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Step {
        Pick,
        Confirm,
        Run,
    }

    struct PickFlow {
        armed: bool,
    }

    impl Flow for PickFlow {
        type Step = Step;

        fn steps(&self) -> &[Step] {
            &[Step::Pick, Step::Confirm, Step::Run]
        }

        fn gate(&self, step: Step, selected: &BTreeSet<EntityId>) -> bool {
            match step {
                Step::Pick => !selected.is_empty(),
                Step::Confirm => self.armed,
                Step::Run => false,
            }
        }
    }

    struct CountingAdapter {
        calls: Cell<usize>,
        outcome: Result<ExecutionReport, AdapterError>,
    }

    impl CountingAdapter {
        fn ok() -> Self {
            Self {
                calls: Cell::new(0),
                outcome: Ok(report_one()),
            }
        }

        fn err(message: &str) -> Self {
            Self {
                calls: Cell::new(0),
                outcome: Err(AdapterError::Remote(message.to_string())),
            }
        }
    }

    impl ExecutionAdapter for CountingAdapter {
        fn execute(&self, _request: &ExecutionRequest) -> Result<ExecutionReport, AdapterError> {
            self.calls.set(self.calls.get() + 1);
            self.outcome.clone()
        }
    }

    fn report_one() -> ExecutionReport {
        ExecutionReport {
            results: vec![ExecutionOutcome {
                target: "G1".to_string(),
                source: "U1".to_string(),
                success: true,
                error: None,
                post_id: None,
            }],
            successful: 1,
            total: 1,
        }
    }

    fn request() -> ExecutionRequest {
        ExecutionRequest::Repost(crate::remote::RepostRequest {
            token: "vk1.t".to_string(),
            source_groups: vec!["555".to_string()],
            source_users: Vec::new(),
            post_count: 1,
            target_groups: Vec::new(),
        })
    }

    fn armed_wizard() -> SelectionWizard<PickFlow> {
        let mut wizard = SelectionWizard::new(PickFlow { armed: true });
        wizard.toggle_select(&EntityId("1".to_string()));
        assert!(wizard.advance());
        wizard
    }

    #[test]
    fn advance_is_blocked_until_the_gate_passes() {
        let mut wizard = SelectionWizard::new(PickFlow { armed: true });
        assert!(!wizard.advance());
        assert_eq!(wizard.step(), Step::Pick);

        assert!(wizard.toggle_select(&EntityId("1".to_string())));
        assert!(wizard.advance());
        assert_eq!(wizard.step(), Step::Confirm);
    }

    #[test]
    fn retreat_is_a_noop_on_the_first_step() {
        let mut wizard = SelectionWizard::new(PickFlow { armed: true });
        assert!(!wizard.retreat());
        assert_eq!(wizard.step(), Step::Pick);
    }

    #[test]
    fn toggle_is_ignored_on_the_execution_step() {
        let mut wizard = armed_wizard();
        assert!(wizard.advance());
        assert_eq!(wizard.step(), Step::Run);
        assert!(!wizard.toggle_select(&EntityId("2".to_string())));
        assert!(wizard.is_selected(&EntityId("1".to_string())));
    }

    #[test]
    fn execute_requires_the_launch_position() {
        let mut wizard = SelectionWizard::new(PickFlow { armed: true });
        let adapter = CountingAdapter::ok();
        let err = wizard.execute(&adapter, &request()).unwrap_err();
        assert!(matches!(err, WizardError::NotExecutable));
        assert_eq!(adapter.calls.get(), 0);
    }

    #[test]
    fn execute_runs_the_adapter_exactly_once() {
        let mut wizard = armed_wizard();
        let adapter = CountingAdapter::ok();
        {
            let report = wizard.execute(&adapter, &request()).unwrap();
            assert_eq!(report.successful, 1);
        }
        assert_eq!(adapter.calls.get(), 1);
        assert_eq!(wizard.progress(), 100);
        assert!(!wizard.is_executing());
        assert!(wizard.is_complete());
    }

    #[test]
    fn second_begin_while_outstanding_is_concurrent() {
        let mut wizard = armed_wizard();
        wizard.begin_execute().unwrap();
        assert!(wizard.is_executing());
        assert_eq!(wizard.step(), Step::Run);

        let adapter = CountingAdapter::ok();
        let err = wizard.execute(&adapter, &request()).unwrap_err();
        assert!(matches!(err, WizardError::ConcurrentExecution));
        assert_eq!(adapter.calls.get(), 0);

        let outcome = adapter.execute(&request());
        assert_eq!(adapter.calls.get(), 1);
        assert!(wizard.finish_execute(outcome).is_ok());
        assert_eq!(wizard.progress(), 100);
    }

    #[test]
    fn failed_execution_keeps_progress_below_100() {
        let mut wizard = armed_wizard();
        let adapter = CountingAdapter::err("rate limited");
        let err = wizard.execute(&adapter, &request()).unwrap_err();
        assert!(matches!(
            &err,
            WizardError::Adapter(AdapterError::Remote(msg)) if msg == "rate limited"
        ));
        assert_eq!(err.to_string(), "rate limited");
        assert_eq!(wizard.progress(), 0);
        assert!(!wizard.is_executing());
        assert!(wizard.is_complete());
        assert!(wizard.report().is_none());
    }

    #[test]
    fn a_completed_wizard_rejects_every_transition() {
        let mut wizard = armed_wizard();
        let adapter = CountingAdapter::ok();
        wizard.execute(&adapter, &request()).unwrap();

        assert!(!wizard.advance());
        assert!(!wizard.retreat());
        assert!(!wizard.toggle_select(&EntityId("2".to_string())));
        let err = wizard.execute(&adapter, &request()).unwrap_err();
        assert!(matches!(err, WizardError::NotExecutable));
        assert_eq!(adapter.calls.get(), 1);
    }

    #[test]
    fn filter_leaves_the_selection_alone() {
        let mut wizard = SelectionWizard::new(PickFlow { armed: true });
        wizard.toggle_select(&EntityId("1".to_string()));
        wizard.filter_by(SourceFilter::Category("Tech".to_string()));
        assert!(wizard.is_selected(&EntityId("1".to_string())));
        assert_eq!(
            wizard.source_filter(),
            &SourceFilter::Category("Tech".to_string())
        );
    }
}
