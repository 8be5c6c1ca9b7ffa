use iced::widget::{Column, Container, Row, Space, Text};
use iced::{Alignment, Element, Font, Length};

use crate::client::models::messages::Message;
use crate::client::services::notifier::{Notice, Notifier};

const WARNING_COLOR: iced::Color = iced::Color::from_rgb(1.0, 0.8, 0.0);
const TOAST_TEXT: iced::Color = iced::Color::from_rgb(0.15, 0.12, 0.0);
const TOAST_WIDTH: f32 = 360.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Warning toasts currently on screen. Each toast is auto-dismissed by a
/// timer the app schedules when it appears.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    unscheduled: Vec<u64>,
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Ids of toasts whose dismissal timer has not been started yet.
    pub fn take_unscheduled(&mut self) -> Vec<u64> {
        std::mem::take(&mut self.unscheduled)
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notice: Notice) {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            message: notice.message,
        });
        self.unscheduled.push(self.next_id);
    }
}

fn toast_view(toast: &Toast) -> Element<'_, Message> {
    Container::new(
        Row::new()
            .spacing(12)
            .align_items(Alignment::Center)
            .push(Text::new("⚠️").font(Font::with_name("Segoe UI Emoji")).size(18))
            .push(Text::new(&toast.message).size(15).style(TOAST_TEXT)),
    )
    .padding([12, 16])
    .width(Length::Fixed(TOAST_WIDTH))
    .style(iced::theme::Container::Custom(Box::new(|_: &iced::Theme| {
        iced::widget::container::Appearance {
            background: Some(iced::Background::Color(WARNING_COLOR)),
            text_color: Some(TOAST_TEXT),
            border: iced::Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            shadow: iced::Shadow {
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
                color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            },
        }
    })))
    .into()
}

/// Toast stack for the top-right corner, newest last.
pub fn toasts_view(toasts: &[Toast]) -> Element<'_, Message> {
    if toasts.is_empty() {
        return Space::new(Length::Fill, Length::Fixed(0.0)).into();
    }
    let stack = toasts
        .iter()
        .fold(Column::new().spacing(8).align_items(Alignment::End), |column, toast| {
            column.push(toast_view(toast))
        });
    Container::new(stack)
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Right)
        .padding([16, 16, 0, 16])
        .into()
}
