pub mod incident_handler;

pub use incident_handler::{
    __path_create_incident, __path_delete_incident, __path_get_incident, __path_list_incidents,
    create_incident, delete_incident, get_incident, list_incidents,
};
