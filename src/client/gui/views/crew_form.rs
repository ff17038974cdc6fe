use iced::{Element, Length, Alignment, Color, Font};
use iced::widget::{Column, Row, Text, TextInput, Button, Container, Scrollable, Space};
use crate::client::models::messages::Message;
use crate::client::models::form_state::FormState;

const ERROR_COLOR: Color = Color::from_rgb(1.0, 0.0, 0.0);
const RESPONSE_BG: Color = Color::from_rgb(0.957, 0.957, 0.957); // #f4f4f4

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn response_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(RESPONSE_BG)),
        text_color: Some(Color::BLACK),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn view(state: &FormState) -> Element<Message> {
    let submit_enabled = state.can_submit();

    let title = Text::new("Get Crew Data")
        .size(32)
        .font(BOLD_FONT)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    let address_input = TextInput::new("Enter address", &state.address)
        .on_input(Message::AddressChanged)
        .on_submit(if submit_enabled { Message::Submit } else { Message::None })
        .width(Length::Fill)
        .padding(8);

    let submit_button = {
        let button = Button::new(Text::new(state.submit_label())).padding([8, 16]);
        if submit_enabled {
            button.on_press(Message::Submit)
        } else {
            button
        }
    };

    let form = Row::new()
        .spacing(16)
        .align_items(Alignment::Center)
        .push(address_input)
        .push(submit_button);

    let error_element: Element<Message> = match &state.error {
        Some(error) => Text::new(format!("Error: {}", error)).style(ERROR_COLOR).into(),
        None => Space::new(Length::Fill, Length::Fixed(0.0)).into(),
    };

    let response_element: Element<Message> = match &state.response {
        Some(response) => Container::new(Scrollable::new(
            Text::new(response.as_str()).font(Font::MONOSPACE).size(14),
        ))
        .width(Length::Fill)
        .padding(16)
        .style(iced::theme::Container::Custom(Box::new(response_appearance)))
        .into(),
        None => Space::new(Length::Fill, Length::Fixed(0.0)).into(),
    };

    let content = Column::new()
        .max_width(720.0)
        .spacing(16)
        .padding(32)
        .align_items(Alignment::Center)
        .push(title)
        .push(form)
        .push(error_element)
        .push(response_element);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .into()
}
