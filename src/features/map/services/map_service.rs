use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::core::config::MapConfig;
use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::CategoryService;
use crate::features::map::dtos::{
    LayerCategoryDto, LayersDto, LayersQuery, MapConfigDto, MapConfigQuery, MapMarkerDto,
    MapMarkersDto, MapStyleDto, MarkersQuery,
};
use crate::features::map::geo::{is_plottable, marker_size};
use crate::features::map::selection::{
    matches_search, matches_selection, selection_state, toggle_category, toggle_subcategory,
};
use crate::features::map::styles::MapStyle;
use crate::shared::constants::{
    CATEGORY_COLORS, CONDITION_FILTERS, DEFAULT_MARKER_COLOR, DEFAULT_ZOOM, FOCUS_ZOOM,
    MAP_CENTER, OSM_TILE_URL,
};

/// Location fields needed to place a marker
#[derive(Debug, Clone, FromRow)]
pub struct MarkerRow {
    pub id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category_id: Option<Uuid>,
    pub subcategory_id: Option<Uuid>,
    pub condition: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

/// Parsed marker filters from the query string
#[derive(Debug, Default)]
pub struct MarkerFilter {
    pub selection: Option<HashSet<Uuid>>,
    pub conditions: Option<HashSet<String>>,
    pub query: String,
}

impl MarkerFilter {
    /// Parse comma-separated query parameters. Malformed ids are skipped
    /// rather than rejected, mirroring how unplottable rows are handled.
    pub fn from_query(query: &MarkersQuery) -> Self {
        let selection = query.subcategories.as_deref().map(parse_id_list);

        let conditions = query.conditions.as_deref().map(|raw| {
            raw.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        Self {
            selection,
            conditions,
            query: query.q.clone().unwrap_or_default(),
        }
    }

    fn matches(&self, row: &MarkerRow) -> bool {
        if let Some(selection) = &self.selection {
            if !matches_selection(row.category_id, row.subcategory_id, selection) {
                return false;
            }
        }

        if let Some(conditions) = &self.conditions {
            match &row.condition {
                Some(condition) if conditions.contains(condition) => {}
                _ => return false,
            }
        }

        matches_search(
            &self.query,
            &row.name,
            row.description.as_deref(),
            row.address.as_deref(),
        )
    }
}

/// Parse a comma-separated id list, skipping malformed entries
fn parse_id_list(raw: &str) -> HashSet<Uuid> {
    raw.split(',')
        .filter_map(|s| Uuid::parse_str(s.trim()).ok())
        .collect()
}

/// Build markers from location rows: apply the filter, skip unplottable
/// coordinates silently, and tint by the category palette.
pub fn build_markers(
    rows: Vec<MarkerRow>,
    category_order: &[Uuid],
    filter: &MarkerFilter,
) -> Vec<MapMarkerDto> {
    let palette_index: HashMap<Uuid, usize> = category_order
        .iter()
        .enumerate()
        .map(|(i, id)| (*id, i))
        .collect();

    rows.into_iter()
        .filter(|row| is_plottable(row.latitude, row.longitude))
        .filter(|row| filter.matches(row))
        .map(|row| {
            let color = row
                .category_id
                .and_then(|id| palette_index.get(&id))
                .map(|i| CATEGORY_COLORS[i % CATEGORY_COLORS.len()])
                .unwrap_or(DEFAULT_MARKER_COLOR)
                .to_string();

            MapMarkerDto {
                id: row.id,
                name: row.name,
                latitude: row.latitude,
                longitude: row.longitude,
                color,
                category_id: row.category_id,
                subcategory_id: row.subcategory_id,
                condition: row.condition,
                address: row.address,
                description: row.description,
            }
        })
        .collect()
}

/// Apply the requested toggle to the selection, then derive each category's
/// tri-state checkbox over the result.
pub fn build_layers(
    categories: Vec<CategoryResponseDto>,
    mut selected: HashSet<Uuid>,
    toggled_category: Option<Uuid>,
    toggled_id: Option<Uuid>,
) -> LayersDto {
    if let Some(category_id) = toggled_category {
        if let Some(category) = categories.iter().find(|c| c.id == category_id) {
            let subcategory_ids: Vec<Uuid> =
                category.subcategories.iter().map(|s| s.id).collect();
            toggle_category(category_id, &subcategory_ids, &mut selected);
        }
    }

    if let Some(id) = toggled_id {
        toggle_subcategory(id, &mut selected);
    }

    let categories = categories
        .into_iter()
        .map(|category| {
            let subcategory_ids: Vec<Uuid> =
                category.subcategories.iter().map(|s| s.id).collect();
            let state = selection_state(category.id, &subcategory_ids, &selected);

            LayerCategoryDto {
                id: category.id,
                name: category.name,
                icon: category.icon,
                state,
                subcategories: category.subcategories,
            }
        })
        .collect();

    let mut selected: Vec<Uuid> = selected.into_iter().collect();
    selected.sort();

    LayersDto {
        categories,
        selected,
        condition_filters: CONDITION_FILTERS.iter().map(|s| s.to_string()).collect(),
    }
}

/// Service for the public map view
pub struct MapService {
    pool: PgPool,
    config: MapConfig,
    category_service: Arc<CategoryService>,
}

impl MapService {
    pub fn new(pool: PgPool, config: MapConfig, category_service: Arc<CategoryService>) -> Self {
        Self {
            pool,
            config,
            category_service,
        }
    }

    /// Map bootstrap configuration: center, zoom levels, style catalogue
    pub fn config(&self, query: &MapConfigQuery) -> MapConfigDto {
        let active_style = MapStyle::from_id(query.style.as_deref().unwrap_or_default());

        let styles = MapStyle::ALL
            .into_iter()
            .map(|style| MapStyleDto {
                id: style.id().to_string(),
                name: style.label().to_string(),
                url: self
                    .config
                    .maptiler_api_key
                    .as_deref()
                    .map(|key| style.style_url(key)),
            })
            .collect();

        MapConfigDto {
            center: MAP_CENTER,
            default_zoom: DEFAULT_ZOOM,
            focus_zoom: FOCUS_ZOOM,
            active_style: active_style.id().to_string(),
            styles,
            fallback_tile_url: OSM_TILE_URL.to_string(),
            boundary_path: self
                .config
                .boundary_geojson_url
                .as_ref()
                .map(|_| "/api/map/boundary".to_string()),
        }
    }

    /// Markers for the current view, filtered by selection/condition/search
    pub async fn markers(&self, query: &MarkersQuery) -> Result<MapMarkersDto> {
        let locations = sqlx::query_as::<_, MarkerRow>(
            r#"
            SELECT id, name, latitude, longitude, category_id, subcategory_id,
                   condition, address, description
            FROM locations
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool);

        let category_order = sqlx::query_scalar::<_, Uuid>(
            r#"SELECT id FROM categories ORDER BY created_at, name"#,
        )
        .fetch_all(&self.pool);

        let (locations, category_order) =
            futures::try_join!(locations, category_order).map_err(|e| {
                tracing::error!("Failed to fetch map data: {:?}", e);
                AppError::Database(e)
            })?;

        let filter = MarkerFilter::from_query(query);
        let markers = build_markers(locations, &category_order, &filter);
        let total = markers.len() as i64;

        Ok(MapMarkersDto {
            markers,
            total,
            marker_size: marker_size(query.zoom.unwrap_or(DEFAULT_ZOOM as f64)),
        })
    }

    /// Layers panel: categories with tri-state checkboxes over the submitted
    /// selection, optionally applying one toggle first
    pub async fn layers(&self, query: &LayersQuery) -> Result<LayersDto> {
        let categories = self.category_service.list().await?;
        let selected = query
            .selected
            .as_deref()
            .map(parse_id_list)
            .unwrap_or_default();

        Ok(build_layers(
            categories,
            selected,
            query.toggle_category,
            query.toggle,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::dtos::SubcategoryResponseDto;
    use crate::features::map::selection::SelectionState;

    fn row(name: &str) -> MarkerRow {
        MarkerRow {
            id: Uuid::new_v4(),
            name: name.to_string(),
            latitude: -6.535,
            longitude: 110.74,
            category_id: None,
            subcategory_id: None,
            condition: None,
            address: None,
            description: None,
        }
    }

    fn category_with_subs(name: &str, sub_count: usize) -> CategoryResponseDto {
        let id = Uuid::new_v4();
        CategoryResponseDto {
            id,
            name: name.to_string(),
            icon: None,
            subcategories: (0..sub_count)
                .map(|i| SubcategoryResponseDto {
                    id: Uuid::new_v4(),
                    name: format!("{} {}", name, i + 1),
                    category_id: id,
                })
                .collect(),
        }
    }

    #[test]
    fn test_unplottable_rows_are_skipped_silently() {
        let mut bad = row("Jembatan Hilang");
        bad.latitude = f64::NAN;
        let rows = vec![row("Balai Desa"), bad];

        let markers = build_markers(rows, &[], &MarkerFilter::default());
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].name, "Balai Desa");
    }

    #[test]
    fn test_palette_assignment_follows_category_order() {
        let categories: Vec<Uuid> = (0..2).map(|_| Uuid::new_v4()).collect();
        let mut first = row("Posyandu");
        first.category_id = Some(categories[0]);
        let mut second = row("Poskamling");
        second.category_id = Some(categories[1]);
        let uncategorized = row("Tugu");

        let markers = build_markers(
            vec![first, second, uncategorized],
            &categories,
            &MarkerFilter::default(),
        );

        assert_eq!(markers[0].color, CATEGORY_COLORS[0]);
        assert_eq!(markers[1].color, CATEGORY_COLORS[1]);
        assert_eq!(markers[2].color, DEFAULT_MARKER_COLOR);
    }

    #[test]
    fn test_search_filter_matches_address_only_records() {
        let mut with_address = row("Balai Desa");
        with_address.address = Some("Jl. Krajan Timur".to_string());
        let other = row("Masjid Jami");

        let filter = MarkerFilter {
            query: "krajan".to_string(),
            ..MarkerFilter::default()
        };
        let markers = build_markers(vec![with_address.clone(), other.clone()], &[], &filter);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].name, "Balai Desa");

        // Clearing the query restores the full list
        let markers = build_markers(vec![with_address, other], &[], &MarkerFilter::default());
        assert_eq!(markers.len(), 2);
    }

    #[test]
    fn test_condition_filter() {
        let mut baik = row("Jalan Desa");
        baik.condition = Some("Baik".to_string());
        let mut rusak = row("Jembatan Kali");
        rusak.condition = Some("Rusak Berat".to_string());
        let unset = row("Tugu");

        let filter = MarkerFilter {
            conditions: Some(["Rusak Berat".to_string()].into_iter().collect()),
            ..MarkerFilter::default()
        };
        let markers = build_markers(vec![baik, rusak, unset], &[], &filter);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].name, "Jembatan Kali");
    }

    #[test]
    fn test_selection_filter_hides_unmatched_locations() {
        let category = Uuid::new_v4();
        let sub = Uuid::new_v4();

        let mut by_sub = row("SDN 1");
        by_sub.category_id = Some(category);
        by_sub.subcategory_id = Some(sub);
        let mut bare = row("Kantor Desa");
        bare.category_id = Some(category);
        let uncategorized = row("Tugu");

        let filter = MarkerFilter {
            selection: Some([sub, category].into_iter().collect()),
            ..MarkerFilter::default()
        };
        let markers = build_markers(vec![by_sub, bare, uncategorized], &[category], &filter);
        assert_eq!(markers.len(), 2);
    }

    #[test]
    fn test_layers_category_toggle_selects_subcategories_and_own_id() {
        let category = category_with_subs("Jalan", 2);
        let category_id = category.id;

        let layers = build_layers(
            vec![category],
            HashSet::new(),
            Some(category_id),
            None,
        );

        // Both subcategories plus the category's own id
        assert_eq!(layers.selected.len(), 3);
        assert_eq!(layers.categories[0].state, SelectionState::Full);
    }

    #[test]
    fn test_layers_single_toggle_yields_partial_state() {
        let category = category_with_subs("Fasilitas", 2);
        let sub_id = category.subcategories[0].id;

        let layers = build_layers(vec![category], HashSet::new(), None, Some(sub_id));

        assert_eq!(layers.selected, vec![sub_id]);
        assert_eq!(layers.categories[0].state, SelectionState::Partial);
    }

    #[test]
    fn test_layers_toggle_of_full_category_clears_it() {
        let category = category_with_subs("Saluran", 1);
        let category_id = category.id;
        let selected: HashSet<Uuid> = category
            .subcategories
            .iter()
            .map(|s| s.id)
            .chain([category_id])
            .collect();

        let layers = build_layers(vec![category], selected, Some(category_id), None);

        assert!(layers.selected.is_empty());
        assert_eq!(layers.categories[0].state, SelectionState::None);
    }

    #[test]
    fn test_layers_carry_condition_filters() {
        let layers = build_layers(vec![], HashSet::new(), None, None);
        assert_eq!(
            layers.condition_filters,
            vec!["Baik", "Rusak Ringan", "Rusak Berat"]
        );
    }

    #[test]
    fn test_parse_id_list_skips_malformed_entries() {
        let id = Uuid::new_v4();
        let parsed = parse_id_list(&format!("{}, not-a-uuid,", id));
        assert_eq!(parsed.len(), 1);
        assert!(parsed.contains(&id));
    }
}
