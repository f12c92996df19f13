//! core::types
//!
//! The job plan model: the durable description of a planned interactive
//! rebase, written once by the host application and consumed by both editor
//! callbacks.
//!
//! # Wire Format
//!
//! A plan is a bare JSON array of jobs, ordered in rebase execution order
//! (first-applied first):
//!
//! ```json
//! [
//!   { "action": "pick",   "commitId": "abc123", "message": "" },
//!   { "action": "reword", "commitId": "def456", "message": "fix typo" }
//! ]
//! ```
//!
//! Field names are camelCase because the host planning UI writes the file.
//! Unknown fields are rejected; unknown *action tags* are not - they fold
//! into [`RebaseAction::Drop`], mirroring the todo-letter fallback.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One planned rebase step kind.
///
/// Each action maps to exactly one single-letter command in Git's
/// rebase-todo syntax via [`RebaseAction::todo_letter`]. The mapping is
/// total: every value outside the five named non-drop kinds renders as the
/// drop letter. This fallback is an intentional policy, not an oversight -
/// a step the renderer does not positively recognize must never be replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RebaseAction {
    /// Keep the commit as-is (`p`).
    Pick,
    /// Stop after applying the commit for amending (`e`).
    Edit,
    /// Keep the commit but replace its message (`r`).
    Reword,
    /// Meld into the previous commit, combining messages (`s`).
    Squash,
    /// Meld into the previous commit, discarding this message (`f`).
    Fixup,
    /// Remove the commit (`d`).
    Drop,
}

impl RebaseAction {
    /// All action kinds, in the order the host UI presents them.
    pub const ALL: [RebaseAction; 6] = [
        RebaseAction::Pick,
        RebaseAction::Edit,
        RebaseAction::Reword,
        RebaseAction::Squash,
        RebaseAction::Fixup,
        RebaseAction::Drop,
    ];

    /// Parse a wire tag, folding anything unrecognized into `Drop`.
    ///
    /// # Example
    ///
    /// ```
    /// use repilot::core::types::RebaseAction;
    ///
    /// assert_eq!(RebaseAction::from_tag("pick"), RebaseAction::Pick);
    /// assert_eq!(RebaseAction::from_tag("merge"), RebaseAction::Drop);
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "pick" => RebaseAction::Pick,
            "edit" => RebaseAction::Edit,
            "reword" => RebaseAction::Reword,
            "squash" => RebaseAction::Squash,
            "fixup" => RebaseAction::Fixup,
            _ => RebaseAction::Drop,
        }
    }

    /// The lowercase wire tag for this action.
    pub fn tag(self) -> &'static str {
        match self {
            RebaseAction::Pick => "pick",
            RebaseAction::Edit => "edit",
            RebaseAction::Reword => "reword",
            RebaseAction::Squash => "squash",
            RebaseAction::Fixup => "fixup",
            _ => "drop",
        }
    }

    /// The single-letter command in Git's rebase-todo syntax.
    ///
    /// Total over all values: the five non-drop kinds map to their letters,
    /// everything else maps to `d`.
    ///
    /// # Example
    ///
    /// ```
    /// use repilot::core::types::RebaseAction;
    ///
    /// assert_eq!(RebaseAction::Reword.todo_letter(), 'r');
    /// assert_eq!(RebaseAction::Drop.todo_letter(), 'd');
    /// ```
    pub fn todo_letter(self) -> char {
        match self {
            RebaseAction::Pick => 'p',
            RebaseAction::Edit => 'e',
            RebaseAction::Reword => 'r',
            RebaseAction::Squash => 's',
            RebaseAction::Fixup => 'f',
            _ => 'd',
        }
    }
}

impl Serialize for RebaseAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for RebaseAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(RebaseAction::from_tag(&tag))
    }
}

/// One planned rebase step.
///
/// `commit_id` is a full or abbreviated SHA and is required for todo
/// rendering. `message` is only consumed for steps whose message-editor
/// callback Git actually fires, but it is always present in the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Job {
    /// What to do with the commit.
    pub action: RebaseAction,

    /// Full or abbreviated SHA of the commit this step applies to.
    pub commit_id: String,

    /// Replacement commit message for steps that take one.
    pub message: String,
}

impl Job {
    /// Render this job as a rebase-todo line: `"<letter> <commitId>"`.
    ///
    /// # Example
    ///
    /// ```
    /// use repilot::core::types::{Job, RebaseAction};
    ///
    /// let job = Job {
    ///     action: RebaseAction::Pick,
    ///     commit_id: "abc123".into(),
    ///     message: String::new(),
    /// };
    /// assert_eq!(job.todo_line(), "p abc123");
    /// ```
    pub fn todo_line(&self) -> String {
        format!("{} {}", self.action.todo_letter(), self.commit_id)
    }
}

/// An ordered sequence of jobs: the full rebase plan.
///
/// Order is significant - it is rebase execution order. The plan is written
/// once by the host before the rebase subprocess starts and is immutable for
/// the remainder of the rebase.
///
/// # Invariant
///
/// The index of a job equals the zero-based count of completed steps
/// recorded by Git's progress marker at the moment the message-editor
/// callback fires for that job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobPlan {
    jobs: Vec<Job>,
}

impl JobPlan {
    /// Create a plan from an ordered job list.
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    /// Number of planned steps.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the plan contains no steps.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// The job at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Job> {
        self.jobs.get(index)
    }

    /// The jobs in execution order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Iterate over the jobs in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.jobs.iter()
    }
}

impl From<Vec<Job>> for JobPlan {
    fn from(jobs: Vec<Job>) -> Self {
        Self::new(jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(action: RebaseAction, commit_id: &str, message: &str) -> Job {
        Job {
            action,
            commit_id: commit_id.into(),
            message: message.into(),
        }
    }

    #[test]
    fn todo_letters_for_named_kinds() {
        assert_eq!(RebaseAction::Pick.todo_letter(), 'p');
        assert_eq!(RebaseAction::Edit.todo_letter(), 'e');
        assert_eq!(RebaseAction::Reword.todo_letter(), 'r');
        assert_eq!(RebaseAction::Squash.todo_letter(), 's');
        assert_eq!(RebaseAction::Fixup.todo_letter(), 'f');
    }

    #[test]
    fn drop_renders_drop_letter() {
        assert_eq!(RebaseAction::Drop.todo_letter(), 'd');
    }

    #[test]
    fn tag_roundtrip_for_all_kinds() {
        for action in RebaseAction::ALL {
            assert_eq!(RebaseAction::from_tag(action.tag()), action);
        }
    }

    #[test]
    fn unrecognized_tag_folds_into_drop() {
        assert_eq!(RebaseAction::from_tag("merge"), RebaseAction::Drop);
        assert_eq!(RebaseAction::from_tag("exec"), RebaseAction::Drop);
        assert_eq!(RebaseAction::from_tag(""), RebaseAction::Drop);
        assert_eq!(RebaseAction::from_tag("PICK"), RebaseAction::Drop);
    }

    #[test]
    fn job_serializes_camel_case() {
        let j = job(RebaseAction::Reword, "def456", "fix typo");
        let json = serde_json::to_string(&j).unwrap();
        assert!(json.contains("\"commitId\":\"def456\""));
        assert!(json.contains("\"action\":\"reword\""));
    }

    #[test]
    fn job_rejects_unknown_fields() {
        let json = r#"{"action":"pick","commitId":"abc","message":"","extra":1}"#;
        assert!(serde_json::from_str::<Job>(json).is_err());
    }

    #[test]
    fn job_with_unknown_action_parses_as_drop() {
        let json = r#"{"action":"merge","commitId":"abc","message":""}"#;
        let j: Job = serde_json::from_str(json).unwrap();
        assert_eq!(j.action, RebaseAction::Drop);
    }

    #[test]
    fn plan_serializes_as_bare_array() {
        let plan = JobPlan::new(vec![job(RebaseAction::Pick, "abc123", "")]);
        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.starts_with('['));
        assert!(json.ends_with(']'));
    }

    #[test]
    fn plan_preserves_order() {
        let plan = JobPlan::new(vec![
            job(RebaseAction::Pick, "aaa", ""),
            job(RebaseAction::Squash, "bbb", "combined"),
            job(RebaseAction::Drop, "ccc", ""),
        ]);
        let ids: Vec<&str> = plan.iter().map(|j| j.commit_id.as_str()).collect();
        assert_eq!(ids, vec!["aaa", "bbb", "ccc"]);
        assert_eq!(plan.len(), 3);
        assert!(!plan.is_empty());
        assert_eq!(plan.get(1).unwrap().commit_id, "bbb");
        assert!(plan.get(3).is_none());
    }

    #[test]
    fn todo_line_format() {
        assert_eq!(job(RebaseAction::Pick, "abc123", "").todo_line(), "p abc123");
        assert_eq!(
            job(RebaseAction::Reword, "def456", "fix typo").todo_line(),
            "r def456"
        );
    }
}
