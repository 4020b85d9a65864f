mod appointment_dto;

pub use appointment_dto::{AppointmentDto, ScheduleAppointmentDto};
