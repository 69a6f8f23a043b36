//! Panel layout: belief grid with sidebar and event log on the right, info bar below.

use taffy::TaffyTree;
use taffy::prelude::*;

pub struct LayoutNodes {
    root: NodeId,
    main_row: NodeId,
    grid: NodeId,
    right_col: NodeId,
    sidebar: NodeId,
    event_log: NodeId,
    info_bar: NodeId,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PanelRect {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

pub struct FrameLayout {
    pub grid: PanelRect,
    pub sidebar: PanelRect,
    pub event_log: PanelRect,
    pub info_bar: PanelRect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarButton {
    Reset,
    Auto,
    Step,
    Sound,
}

impl SidebarButton {
    pub const ALL: [SidebarButton; 4] =
        [SidebarButton::Reset, SidebarButton::Auto, SidebarButton::Step, SidebarButton::Sound];
}

const BUTTON_HEIGHT: f32 = 40.0;
const BUTTON_GAP: f32 = 15.0;
const BUTTON_INSET: f32 = 15.0;

pub fn setup_layout(taffy: &mut TaffyTree<()>) -> LayoutNodes {
    let grid = taffy
        .new_leaf(Style {
            flex_grow: 1.0,
            margin: taffy::Rect { left: zero(), right: length(20.0), top: zero(), bottom: zero() },
            ..Default::default()
        })
        .expect("grid node");
    let sidebar = taffy
        .new_leaf(Style {
            size: Size { width: percent(1.0), height: length(260.0) },
            margin: taffy::Rect { left: zero(), right: zero(), top: zero(), bottom: length(20.0) },
            ..Default::default()
        })
        .expect("sidebar node");
    let event_log = taffy.new_leaf(Style { flex_grow: 1.0, ..Default::default() }).expect("log node");
    let right_col = taffy
        .new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                size: Size { width: length(320.0), height: percent(1.0) },
                flex_shrink: 0.0,
                ..Default::default()
            },
            &[sidebar, event_log],
        )
        .expect("right column node");
    let main_row = taffy
        .new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Row,
                flex_grow: 1.0,
                margin: taffy::Rect { left: zero(), right: zero(), top: zero(), bottom: length(20.0) },
                ..Default::default()
            },
            &[grid, right_col],
        )
        .expect("main row node");
    let info_bar = taffy
        .new_leaf(Style {
            size: Size { width: percent(1.0), height: length(90.0) },
            flex_shrink: 0.0,
            ..Default::default()
        })
        .expect("info bar node");
    let root = taffy
        .new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                size: Size { width: percent(1.0), height: percent(1.0) },
                padding: taffy::Rect {
                    left: length(20.0),
                    right: length(20.0),
                    top: length(20.0),
                    bottom: length(20.0),
                },
                ..Default::default()
            },
            &[main_row, info_bar],
        )
        .expect("root node");
    LayoutNodes { root, main_row, grid, right_col, sidebar, event_log, info_bar }
}

pub fn compute_frame_layout(
    taffy: &mut TaffyTree<()>,
    nodes: &LayoutNodes,
    viewport_width: f32,
    viewport_height: f32,
) -> FrameLayout {
    let available_size = Size {
        width: AvailableSpace::Definite(viewport_width),
        height: AvailableSpace::Definite(viewport_height),
    };
    taffy.compute_layout(nodes.root, available_size).expect("compute layout");

    let l_root = taffy.layout(nodes.root).expect("root layout");
    let l_main = taffy.layout(nodes.main_row).expect("main layout");
    let l_grid = taffy.layout(nodes.grid).expect("grid layout");
    let l_right = taffy.layout(nodes.right_col).expect("right layout");
    let l_sidebar = taffy.layout(nodes.sidebar).expect("sidebar layout");
    let l_event = taffy.layout(nodes.event_log).expect("event layout");
    let l_info = taffy.layout(nodes.info_bar).expect("info layout");

    FrameLayout {
        grid: panel_rect(l_grid, &[l_root, l_main]),
        sidebar: panel_rect(l_sidebar, &[l_root, l_main, l_right]),
        event_log: panel_rect(l_event, &[l_root, l_main, l_right]),
        info_bar: panel_rect(l_info, &[l_root]),
    }
}

fn panel_rect(layout: &taffy::Layout, parents: &[&taffy::Layout]) -> PanelRect {
    let mut x = layout.location.x;
    let mut y = layout.location.y;
    for parent in parents {
        x += parent.location.x;
        y += parent.location.y;
    }

    PanelRect { x, y, width: layout.size.width, height: layout.size.height }
}

/// Button rectangles stacked from the top of the sidebar.
pub fn sidebar_buttons(sidebar: PanelRect, ui_scale: f32) -> [(SidebarButton, PanelRect); 4] {
    let inset = BUTTON_INSET * ui_scale;
    let height = BUTTON_HEIGHT * ui_scale;
    let gap = BUTTON_GAP * ui_scale;
    let mut top = sidebar.y + inset;
    SidebarButton::ALL.map(|button| {
        let rect = PanelRect {
            x: sidebar.x + inset,
            y: top,
            width: (sidebar.width - 2.0 * inset).max(0.0),
            height,
        };
        top += height + gap;
        (button, rect)
    })
}

pub fn button_at(sidebar: PanelRect, ui_scale: f32, x: f32, y: f32) -> Option<SidebarButton> {
    sidebar_buttons(sidebar, ui_scale)
        .into_iter()
        .find(|(_, rect)| rect.contains(x, y))
        .map(|(button, _)| button)
}

/// Largest square cell size that fits `rows` x `cols` cells inside `panel`.
pub fn cell_size(panel: PanelRect, rows: usize, cols: usize) -> f32 {
    if rows == 0 || cols == 0 {
        return 0.0;
    }
    (panel.width / cols as f32).min(panel.height / rows as f32).max(0.0)
}
