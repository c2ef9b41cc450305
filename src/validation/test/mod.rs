use entity::prelude::Stat;
use test_utils::{
    builder::TestBuilder,
    fixture::{self, at, at_hour, date},
};

use crate::validation::{
    report::{FieldError, FieldWarning, RateAnchor},
    ElapsedDayPolicy, Validator,
};

mod policy;
mod scenario;
