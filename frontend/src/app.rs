//! DraggableBoardApp - widgets from `board.toml`, a drag handle card and a status bar

use moonzoon_draggable::tokens::*;
use moonzoon_draggable::{DragHandle, PlacementRequest, Position, draggable};
use shared::{BoardConfig, WidgetConfig};
use zoon::*;

use crate::board::BoardStatus;
use crate::config::load_board;

pub struct DraggableBoardApp {
    pub config: BoardConfig,

    /// Drag counts and region occupancy, fed by every widget on the board
    pub board_status: BoardStatus,

    /// Self-rendered card driven by the headless drag handle
    pub handle: DragHandle,

    /// Widgets line up in a column while set, otherwise use their configured placement
    pub arranged: Mutable<bool>,
}

impl DraggableBoardApp {
    pub fn new() -> Self {
        init_theme(Theme::Light);
        Self {
            config: load_board(),
            board_status: BoardStatus::new(),
            handle: DragHandle::new(PlacementRequest::random()),
            arranged: Mutable::new(false),
        }
    }

    pub fn root(&self) -> impl Element {
        Column::new()
            .s(Width::fill())
            .s(Height::screen())
            .s(Background::new().color_signal(neutral_1()))
            .s(Font::new().color_signal(neutral_12()))
            .item(self.header())
            .item(status_bar(&self.board_status))
            .item(self.board())
    }

    fn header(&self) -> impl Element {
        Row::new()
            .s(Width::fill())
            .s(Padding::new().x(16).y(12))
            .s(Gap::new().x(12))
            .s(Borders::new().bottom_signal(
                neutral_4().map(|color| Border::new().width(1).color(color)),
            ))
            .item(
                El::new()
                    .s(Font::new().size(18).weight(FontWeight::SemiBold))
                    .child(Text::new(self.config.title.clone())),
            )
            .item(El::new().s(Width::fill()))
            .item(arrange_toggle(self.arranged.clone()))
            .item(theme_toggle())
    }

    fn board(&self) -> impl Element {
        Column::new()
            .s(Width::fill())
            .s(Height::fill())
            .s(Padding::all(24))
            .s(Gap::new().y(16))
            .items(
                self.config
                    .widgets
                    .iter()
                    .enumerate()
                    .map(|(index, widget)| {
                        let placement = self.arranged.signal().map({
                            let configured = widget.options.placement();
                            move |arranged| {
                                if arranged {
                                    PlacementRequest::fixed(arranged_position(index))
                                } else {
                                    configured
                                }
                            }
                        });
                        widget_card(widget, placement, &self.board_status)
                    }),
            )
            .item(handle_card(self.handle.clone(), self.board_status.clone()))
    }
}

impl Default for DraggableBoardApp {
    fn default() -> Self {
        Self::new()
    }
}

fn theme_toggle() -> impl Element {
    Button::new()
        .s(Padding::new().x(12).y(6))
        .s(RoundedCorners::all(4))
        .s(Background::new().color_signal(primary_6()))
        .s(Font::new().size(13).color_signal(neutral_1()))
        .s(transition_colors())
        .label_signal(theme().map(|theme| {
            Text::new(match theme {
                Theme::Light => "Dark theme",
                Theme::Dark => "Light theme",
            })
        }))
        .on_press(toggle_theme)
}

/// Slot of the `index`-th widget in the arranged column.
fn arranged_position(index: usize) -> Position {
    Position::new(24.0, 140.0 + 64.0 * index as f64)
}

fn arrange_toggle(arranged: Mutable<bool>) -> impl Element {
    Button::new()
        .s(Padding::new().x(12).y(6))
        .s(RoundedCorners::all(4))
        .s(Borders::all_signal(
            neutral_4().map(|color| Border::new().width(1).color(color)),
        ))
        .s(Font::new().size(13).color_signal(neutral_11()))
        .label_signal(arranged.signal().map(|arranged| {
            Text::new(if arranged { "Use configured placement" } else { "Arrange" })
        }))
        .on_press(move || arranged.set_neq(!arranged.get()))
}

fn status_bar(board_status: &BoardStatus) -> impl Element {
    Column::new()
        .s(Padding::new().x(16).y(8))
        .s(Gap::new().y(4))
        .s(Background::new().color_signal(neutral_2()))
        .s(Font::new().size(13).color_signal(neutral_11()))
        .item(Text::with_signal(board_status.summary_signal()))
        .item(Text::with_signal(board_status.region_summary_signal()))
}

fn widget_card(
    widget: &WidgetConfig,
    placement: impl Signal<Item = PlacementRequest> + 'static,
    board_status: &BoardStatus,
) -> impl Element {
    let label = widget.label.clone();
    draggable(Text::new(label.clone()))
        .options(widget.options)
        .placement_signal(placement)
        .on_drag_end({
            let board_status = board_status.clone();
            let label = label.clone();
            move |position| board_status.report_drop(&label, position)
        })
        .on_region_change({
            let board_status = board_status.clone();
            move |region| board_status.report_region(&label, region)
        })
        .build()
}

fn handle_card(handle: DragHandle, board_status: BoardStatus) -> impl Element {
    handle.on_drag_end(move |position| board_status.report_drop("Handle card", position));

    El::new()
        .s(Padding::new().x(12).y(8))
        .s(RoundedCorners::all(6))
        .s(Background::new().color_signal(primary_3()))
        .s(Font::new().size(13).color_signal(neutral_12()))
        .child(Text::with_signal(handle.position_signal().map(|position| {
            format!("Handle card at ({:.0}, {:.0})", position.x, position.y)
        })))
        .update_raw_el(move |raw_el| {
            handle
                .bind(raw_el)
                .style("position", "fixed")
                .style_signal("left", handle.position_signal().map(|p| format!("{}px", p.x)))
                .style_signal("top", handle.position_signal().map(|p| format!("{}px", p.y)))
                .style_signal(
                    "cursor",
                    handle
                        .is_dragging_signal()
                        .map(|is_dragging| if is_dragging { "grabbing" } else { "grab" }),
                )
                .style_signal("box-shadow", handle.is_dragging_signal().map(elevation))
                .style("user-select", "none")
        })
}
