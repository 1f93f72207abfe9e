mod provider_dto;

pub use provider_dto::{
    CreateProviderDto, ProviderFilterQuery, ProviderResponseDto, SetProviderActiveDto,
    UpdateProviderDto,
};
