//! Pipeline step definitions.

/// A single external command in the pipeline.
///
/// Steps carry no arguments and no per-step options; they are an ordered
/// (name, command) pair. The command is run through the shell from the
/// inherited working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Human-readable step name.
    pub name: String,

    /// Shell command to execute.
    pub command: String,
}

impl Step {
    /// Create a step from a name and command.
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }
}

/// The fixed pipeline: run the test suite, then verify formatting.
///
/// The order is deliberate and total. Formatting runs only after the tests
/// pass; there is no configuration that reorders, adds, or removes steps.
pub fn standard_pipeline() -> Vec<Step> {
    vec![
        Step::new("run_all_tests", "./run_all_tests"),
        Step::new("check_formatting", "./check_formatting"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_pipeline_has_fixed_order() {
        let steps = standard_pipeline();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].name, "run_all_tests");
        assert_eq!(steps[1].name, "check_formatting");
    }

    #[test]
    fn standard_pipeline_commands_are_cwd_relative() {
        for step in standard_pipeline() {
            assert!(step.command.starts_with("./"));
        }
    }

    #[test]
    fn step_new_accepts_str_and_string() {
        let a = Step::new("tests", "./run_all_tests");
        let b = Step::new("tests".to_string(), "./run_all_tests".to_string());
        assert_eq!(a, b);
    }
}
