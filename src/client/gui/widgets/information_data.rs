// Widget per un singolo campo dell'indirizzo
use iced::widget::{Column, Container, Space, Text};
use iced::{Color, Element, Font, Length};

use crate::client::models::messages::Message;

pub const EMPTY_VALUE: &str = "-";
/// Width and height of the two loading placeholders.
pub const SKELETON_BLOCKS: [(f32, f32); 2] = [(110.0, 16.0), (180.0, 16.0)];

const LABEL_COLOR: Color = Color::from_rgb(0.09, 0.09, 0.11);
const VALUE_COLOR: Color = Color::from_rgb(0.25, 0.25, 0.3);
const SKELETON_COLOR: Color = Color::from_rgb(0.89, 0.9, 0.92);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDisplay<'a> {
    Skeleton,
    Value { label: &'a str, text: &'a str },
}

/// While loading the text is never shown; otherwise empty or missing
/// values become a dash.
pub fn display<'a>(label: &'a str, text: Option<&'a str>, is_loading: bool) -> FieldDisplay<'a> {
    if is_loading {
        return FieldDisplay::Skeleton;
    }
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => EMPTY_VALUE,
    };
    FieldDisplay::Value { label, text }
}

fn skeleton_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(SKELETON_COLOR)),
        border: iced::Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn view<'a>(label: &'a str, text: Option<&'a str>, is_loading: bool) -> Element<'a, Message> {
    match display(label, text, is_loading) {
        FieldDisplay::Skeleton => SKELETON_BLOCKS
            .iter()
            .fold(Column::new().spacing(8), |column, (width, height)| {
                column.push(
                    Container::new(Space::new(Length::Fixed(*width), Length::Fixed(*height)))
                        .style(iced::theme::Container::Custom(Box::new(skeleton_appearance))),
                )
            })
            .into(),
        FieldDisplay::Value { label, text } => Column::new()
            .spacing(6)
            .width(Length::Fill)
            .push(Text::new(label).font(BOLD_FONT).size(16).style(LABEL_COLOR))
            .push(Text::new(text).size(15).style(VALUE_COLOR))
            .into(),
    }
}
