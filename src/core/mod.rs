pub mod area_series;
pub mod axis_ticks;
pub mod bar_series;
pub mod extent;
pub mod id_sequence;
pub mod layout;
pub mod line_series;
pub mod pie;
pub mod radar;
pub mod scale;
pub mod stack;
pub mod types;

pub use area_series::{area_path, area_path_linear, stacked_area_path};
pub use axis_ticks::{
    DEFAULT_TICK_COUNT, MAX_TICK_COUNT, Tick, TickFormat, TickOptions, nice_tick_step, nice_ticks,
    ticks,
};
pub use bar_series::{BarExtent, clamp_bar_width, ensure_bar_min_height};
pub use extent::{ExtentOptions, extent};
pub use id_sequence::IdSequence;
pub use layout::{Padding, PaddingSpec, inner_rect, normalize_padding};
pub use line_series::{Curve, line_path};
pub use pie::{
    LabelLine, LabelLineOptions, PieArc, PieArcPathSpec, PieOptions, TextAnchor,
    compute_pie_hover_offset, compute_pie_label_line, compute_pie_label_line_with, pie_arc_path,
    pie_arcs, pie_arcs_from_values, polar_to_cartesian,
};
pub use radar::{
    DEFAULT_RADAR_START_ANGLE, RadarOptions, RadarPoint, polygon_path, radar_angles,
    radar_angles_from, radar_grid_rings, radar_points, radar_spokes,
};
pub use scale::{BandScale, LinearScale, PointScale, Scale, ScaleConfig, ScaleKind, ScaleValue};
pub use stack::{SeriesPoint, StackedPoint, stack_series_data};
pub use types::{Point, Rect};
