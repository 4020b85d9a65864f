mod auth_dto;

pub use auth_dto::{AuthResponseDto, AuthUserDto, LoginRequestDto, SignupRequestDto};
