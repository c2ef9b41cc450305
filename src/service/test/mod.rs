use entity::prelude::{Snapshot, Stat};
use test_utils::{
    builder::TestBuilder,
    context::TestContext,
    fixture::{self, date},
};

use crate::{
    config::Config,
    error::{submission::SubmissionError, AppError},
    model::{report::SubmissionOutcome, submission::SubmissionDto},
    service::submission::SubmissionService,
    validation::ElapsedDayPolicy,
};

mod submit;

fn document(test: TestContext, candidate: Snapshot, confirmed: bool) -> SubmissionDto {
    SubmissionDto {
        trainer: test.trainer,
        history: test.history,
        candidate,
        double_check_confirmation: confirmed,
    }
}
