pub mod appointment_handler;

pub use appointment_handler::{
    __path_list_appointments, __path_schedule_appointment, list_appointments,
    schedule_appointment,
};
