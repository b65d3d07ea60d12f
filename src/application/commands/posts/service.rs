// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::application::ports::{time::Clock, unit_of_work::UnitOfWork};

pub struct PostCommandService {
    pub(super) unit_of_work: Arc<dyn UnitOfWork>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(unit_of_work: Arc<dyn UnitOfWork>, clock: Arc<dyn Clock>) -> Self {
        Self {
            unit_of_work,
            clock,
        }
    }
}
