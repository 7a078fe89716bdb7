use crate::define::{error::DefineError, monitor::UnresolvedEvaluations};
use miette::Report;

pub fn report_unresolved(warning: &UnresolvedEvaluations) {
    log::warn!("{:?}", Report::new(warning.clone()));
}

pub fn report_define_error(error: &DefineError) {
    log::error!("{:?}", Report::new(error.clone()));
}
