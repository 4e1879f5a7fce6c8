mod incident;

pub use incident::{Incident, NewIncident, Severity};
