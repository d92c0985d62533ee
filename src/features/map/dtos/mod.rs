pub mod map_dto;

pub use map_dto::{
    LayerCategoryDto, LayersDto, LayersQuery, MapConfigDto, MapConfigQuery, MapMarkerDto,
    MapMarkersDto, MapStyleDto, MarkersQuery,
};
