//! Declarative heuristic weights for the user and job estimates.
//!
//! The constants mirror the production heuristic table. They are data, not
//! logic: alternative tables can be swapped in and tested in isolation.

use serde::Serialize;

/// How a present field contributes to the user estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum FieldWeight {
    /// A flat contribution whenever the field is present.
    Flat(i64),
    /// The field's numeric value times a factor.
    Scaled(f64),
}

/// Field-level weights feeding the user and job estimates.
#[derive(Debug, Clone, Serialize)]
pub struct SignalWeights {
    /// Time-series fields whose latest values sum into the user count.
    pub user_series_fields: Vec<String>,
    /// Plain numeric fields read as-is into the user count.
    pub user_direct_fields: Vec<String>,
    /// Per-field custom contributions to the user count.
    pub user_custom_fields: Vec<(String, FieldWeight)>,
    /// Time-series field holding the professional-network skill count.
    pub job_skill_field: String,
    /// Fraction of the skill count counted as job openings.
    pub job_skill_ratio: f64,
    /// Time-series field holding the job-board posting count.
    pub job_board_field: String,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            user_series_fields: vec![
                "linkedInSkill".into(),
                "subreddit memberCount".into(),
                "projectEuler members".into(),
            ],
            user_direct_fields: vec!["meetup members".into(), "githubRepo stars".into()],
            user_custom_fields: vec![
                ("wikipedia".into(), FieldWeight::Flat(20)),
                // TODO: weight by package author count once it is recorded.
                ("packageRepository".into(), FieldWeight::Flat(1000)),
                // Assumes ~95% bot traffic and daily visits from ~1% of users.
                ("wikipedia dailyPageViews".into(), FieldWeight::Scaled(5.0)),
                // Linguist registration requires a minimum of 200 users.
                ("linguistGrammarRepo".into(), FieldWeight::Flat(200)),
                ("codeMirror".into(), FieldWeight::Flat(50)),
                ("website".into(), FieldWeight::Flat(1)),
                ("githubRepo".into(), FieldWeight::Flat(1)),
                ("githubRepo forks".into(), FieldWeight::Scaled(3.0)),
                ("annualReport".into(), FieldWeight::Flat(1000)),
            ],
            job_skill_field: "linkedInSkill".into(),
            job_skill_ratio: 0.01,
            job_board_field: "indeedJobs".into(),
        }
    }
}
