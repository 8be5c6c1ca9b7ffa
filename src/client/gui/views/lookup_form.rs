use iced::widget::{Column, Container, Row, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::views::toasts::{toasts_view, ToastQueue};
use crate::client::gui::widgets::information_data;
use crate::client::models::app_state::{CepInput, LookupState};
use crate::client::models::messages::Message;
use crate::common::cep::CEP_PLACEHOLDER;
use crate::common::models::AddressField;

const BG_MAIN: Color = Color::from_rgb(0.95, 0.96, 0.97);
const CARD_BG: Color = Color::WHITE;
const LOGO_BG: Color = Color::from_rgb(0.07, 0.31, 0.29); // teal
const TEXT_PRIMARY: Color = Color::from_rgb(0.09, 0.09, 0.11);
const GRID_COLUMNS: usize = 3;

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 8.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
        },
    }
}

fn logo_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(LOGO_BG)),
        text_color: Some(Color::WHITE),
        border: iced::Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn logo<'a>() -> Element<'a, Message> {
    Container::new(Text::new("ViaCEP").font(BOLD_FONT).size(28))
        .padding([12, 16])
        .style(iced::theme::Container::Custom(Box::new(logo_appearance)))
        .into()
}

fn address_grid<'a>(state: &'a LookupState) -> Element<'a, Message> {
    let address = state.address.as_ref();
    AddressField::all()
        .chunks(GRID_COLUMNS)
        .fold(Column::new().spacing(16), |grid, chunk| {
            let row = chunk.iter().fold(Row::new().spacing(16), |row, field| {
                row.push(
                    Container::new(information_data::view(field.label(), field.text(address), state.loading))
                        .width(Length::FillPortion(1)),
                )
            });
            grid.push(row)
        })
        .into()
}

pub fn view<'a>(input: &'a CepInput, state: &'a LookupState, toasts: &'a ToastQueue) -> Element<'a, Message> {
    let cep_input = Column::new()
        .spacing(6)
        .push(Text::new("Digite o cep:").font(BOLD_FONT).size(16))
        .push(
            TextInput::new(CEP_PLACEHOLDER, input.value())
                .on_input(Message::CepInputChanged)
                .width(Length::Fill)
                .padding(8)
                .size(14),
        );

    let data = Column::new()
        .spacing(16)
        .width(Length::Fill)
        .push(Text::new("Dados:").font(BOLD_FONT).size(16))
        .push(address_grid(state));

    let card = Container::new(
        Column::new()
            .spacing(16)
            .align_items(Alignment::Center)
            .push(logo())
            .push(Container::new(cep_input).max_width(384.0))
            .push(data),
    )
    .padding(16)
    .width(Length::Fixed(560.0))
    .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let page = Column::new()
        .push(toasts_view(toasts.toasts()))
        .push(
            Container::new(card)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x()
                .center_y(),
        );

    Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
