mod incident_dto;

pub use incident_dto::{
    AppendUpdateDto, AssignProviderDto, CreateIncidentDto, IncidentDetailDto,
    IncidentFilterQuery, IncidentResponseDto, StatsDto, UpdateResponseDto,
};
