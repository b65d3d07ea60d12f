// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::application::ports::{time::Clock, unit_of_work::UnitOfWork};

pub struct CommentCommandService {
    pub(super) unit_of_work: Arc<dyn UnitOfWork>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(unit_of_work: Arc<dyn UnitOfWork>, clock: Arc<dyn Clock>) -> Self {
        Self {
            unit_of_work,
            clock,
        }
    }
}
