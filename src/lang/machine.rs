use std::fmt;

use tracing::{debug, trace, warn};

use crate::error::{ReduceError, TraceError};

use super::{reduce, reducible, Environment, Node, Reduction};

/// Rendering of one machine state, `<node>, <environment>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    pub node: String,
    pub environment: String,
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.node, self.environment)
    }
}

/// Drives a program to normal form one reduction at a time.
///
/// Programs are not guaranteed to terminate. A machine without a step limit
/// runs a diverging loop forever; use [`Machine::with_step_limit`] to bound it.
#[derive(Debug, Clone)]
pub struct Machine {
    node: Node,
    environment: Environment,
    step_limit: Option<usize>,
    steps: usize,
}

impl Machine {
    pub fn new(node: Node, environment: Environment) -> Self {
        Self {
            node,
            environment,
            step_limit: None,
            steps: 0,
        }
    }

    /// Makes [`run`](Self::run) and [`trace`](Self::trace) give up with
    /// [`ReduceError::StepLimitExceeded`] once `limit` steps have been taken
    /// without reaching normal form.
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn is_reducible(&self) -> bool {
        reducible(&self.node)
    }

    pub fn into_parts(self) -> (Node, Environment) {
        (self.node, self.environment)
    }

    pub fn record(&self) -> TraceRecord {
        TraceRecord {
            node: self.node.to_string(),
            environment: self.environment.to_string(),
        }
    }

    /// Applies a single reduction.
    ///
    /// Stepping a node in normal form fails with [`ReduceError::Irreducible`].
    /// On any error the machine keeps the state it had before the call.
    pub fn step(&mut self) -> Result<(), ReduceError> {
        trace!(node = %self.node, "reducing");
        match reduce(&self.node, &self.environment)? {
            Reduction::Expression(node) => self.node = node,
            Reduction::Statement(node, environment) => {
                self.node = node;
                self.environment = environment;
            }
        }
        self.steps += 1;
        Ok(())
    }

    pub fn run(&mut self) -> Result<(), ReduceError> {
        while self.advance()? {}
        Ok(())
    }

    /// Like [`run`](Self::run), but also returns every state visited,
    /// the final one included. On failure the states visited so far are
    /// handed back inside the [`TraceError`].
    pub fn trace(&mut self) -> Result<Vec<TraceRecord>, TraceError> {
        let mut records = Vec::new();
        loop {
            records.push(self.record());
            match self.advance() {
                Ok(true) => {}
                Ok(false) => return Ok(records),
                Err(error) => return Err(TraceError { records, error }),
            }
        }
    }

    /// Takes one step unless the node is in normal form. Returns whether a
    /// step was taken.
    fn advance(&mut self) -> Result<bool, ReduceError> {
        debug!(node = %self.node, environment = %self.environment, "state");
        if !self.is_reducible() {
            debug!(steps = self.steps, "reached normal form");
            return Ok(false);
        }
        if let Some(limit) = self.step_limit {
            if self.steps >= limit {
                warn!(limit, "step limit exceeded");
                return Err(ReduceError::StepLimitExceeded { limit });
            }
        }
        self.step()?;
        Ok(true)
    }
}
