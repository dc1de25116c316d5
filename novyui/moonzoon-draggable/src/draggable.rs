// Draggable Component
// Wraps arbitrary content in a container the user can pick up with mouse or touch

use crate::controller::DragController;
use crate::tokens::*;
use shared::{DragProfile, DraggableOptions, LayoutMode, PlacementRequest, Position, Region};
use std::pin::Pin;
use zoon::*;

type PlacementSignal = Pin<Box<dyn Signal<Item = PlacementRequest>>>;

pub struct DraggableBuilder<C> {
    child: C,
    options: DraggableOptions,
    placement: Option<PlacementSignal>,
    drag_end_handler: Option<Box<dyn FnMut(Position)>>,
    region_handler: Option<Box<dyn FnMut(Region)>>,
}

impl<C: Element> DraggableBuilder<C> {
    pub fn new(child: C) -> Self {
        Self {
            child,
            options: DraggableOptions::default(),
            placement: None,
            drag_end_handler: None,
            region_handler: None,
        }
    }

    pub fn options(mut self, options: DraggableOptions) -> Self {
        self.options = options;
        self
    }

    pub fn initial_position(mut self, position: Position) -> Self {
        self.options.initial_position = Some(position);
        self
    }

    /// Random placement wins over an initial position.
    pub fn random_position(mut self, random_position: bool) -> Self {
        self.options.random_position = random_position;
        self
    }

    /// Placement inputs that change over time. Every new request that differs
    /// from the current one resolves the position again.
    pub fn placement_signal(
        mut self,
        placement: impl Signal<Item = PlacementRequest> + 'static,
    ) -> Self {
        self.placement = Some(Box::pin(placement));
        self
    }

    pub fn show_tooltip(mut self, show_tooltip: bool) -> Self {
        self.options.show_tooltip = show_tooltip;
        self
    }

    /// Called with the final position when a drag session ends.
    pub fn on_drag_end(mut self, handler: impl FnMut(Position) + 'static) -> Self {
        self.drag_end_handler = Some(Box::new(handler));
        self
    }

    /// Called with the current region on mount and whenever it changes.
    pub fn on_region_change(mut self, handler: impl FnMut(Region) + 'static) -> Self {
        self.region_handler = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> impl Element {
        let controller = DragController::new(DragProfile::FULL, self.options.placement());

        if let Some(handler) = self.drag_end_handler {
            controller.set_drag_end_handler(handler);
        }
        if let Some(mut handler) = self.region_handler {
            let region_task = Task::start_droppable(
                controller
                    .region_signal()
                    .dedupe()
                    .for_each(move |region| {
                        if let Some(region) = region {
                            handler(region);
                        }
                        async {}
                    }),
            );
            controller.keep_alive(region_task);
        }
        if let Some(placement) = self.placement {
            let placement_task = Task::start_droppable({
                let controller = controller.clone();
                placement.for_each(move |request| {
                    controller.request_placement(request);
                    async {}
                })
            });
            controller.keep_alive(placement_task);
        }

        let show_tooltip = self.options.show_tooltip;

        El::new()
            .s(Padding::all(8))
            .s(RoundedCorners::all(6))
            .s(Background::new().color_signal(neutral_2()))
            .s(Borders::all_signal(
                neutral_4().map(|color| Border::new().width(1).color(color)),
            ))
            .s(Font::new().color_signal(neutral_11()))
            .s(transition_colors())
            .child(
                Column::new()
                    .s(Gap::new().y(4))
                    .item_signal(
                        controller
                            .is_dragging_signal()
                            .map(move |is_dragging| (show_tooltip && !is_dragging).then(tooltip)),
                    )
                    .item(self.child),
            )
            .update_raw_el(move |raw_el| {
                controller
                    .attach(raw_el)
                    .class("draggable-component")
                    .class_signal(
                        controller
                            .is_dragging_signal()
                            .map(|is_dragging| is_dragging.then_some("dragging")),
                    )
                    .class_signal(
                        controller
                            .region_signal()
                            .map(|region| region.map(Region::class_name)),
                    )
                    .style_signal("position", controller.layout_signal().map(LayoutMode::css_position))
                    .style_signal("left", controller.style_signal().map(|style| style.left))
                    .style_signal("top", controller.style_signal().map(|style| style.top))
                    .style_signal(
                        "cursor",
                        controller
                            .is_dragging_signal()
                            .map(|is_dragging| if is_dragging { "grabbing" } else { "grab" }),
                    )
                    .style_signal("box-shadow", controller.is_dragging_signal().map(elevation))
                    .style("user-select", "none")
                    .style("touch-action", "none")
            })
    }
}

fn tooltip() -> impl Element {
    El::new()
        .s(Padding::new().x(8).y(2))
        .s(RoundedCorners::all(4))
        .s(Background::new().color_signal(primary_7()))
        .s(Font::new().size(12).color_signal(neutral_1()))
        .s(transition_opacity())
        .update_raw_el(|raw_el| {
            raw_el
                .class("draggable-tooltip")
                .style("pointer-events", "none")
        })
        .child(Text::new("Drag me"))
}

// Convenience function
pub fn draggable<C: Element>(child: C) -> DraggableBuilder<C> {
    DraggableBuilder::new(child)
}
