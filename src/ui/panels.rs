use iced::widget::text::Shaping;
use iced::widget::{button, column, container, image, mouse_area, row, scrollable, text, Column, Space};
use iced::{alignment, Alignment, Background, Border, ContentFit, Element, Font, Length, Theme};

use super::strings::Strings;
use crate::state::inspection::{Inspection, Status};
use crate::Message;

/// Maximum height of the preview image
const PREVIEW_HEIGHT: f32 = 320.0;
/// Height of the scrollable result area
const RESULT_HEIGHT: f32 = 360.0;

/// Text with complex-script shaping so Thai renders correctly
fn label<'a>(content: impl text::IntoFragment<'a>) -> text::Text<'a> {
    text(content).shaping(Shaping::Advanced)
}

/// Title and subtitle across the top
pub fn header<'a>(strings: &'static Strings) -> Element<'a, Message> {
    column![
        label(strings.title).size(32),
        label(strings.subtitle).size(16).style(text::secondary),
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

/// Left column: drop zone and preview
pub fn upload_column<'a>(
    inspection: &'a Inspection,
    strings: &'static Strings,
    drag_hover: bool,
) -> Element<'a, Message> {
    let mut content: Column<'a, Message> = column![
        label(strings.upload_heading).size(20).style(text::primary),
        drop_zone(strings, drag_hover),
    ]
    .spacing(16);

    if let (Some(preview), Some(selected)) = (inspection.preview(), inspection.image()) {
        content = content.push(
            column![
                label(strings.preview_heading).style(text::secondary),
                image(preview.handle().clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fixed(PREVIEW_HEIGHT)),
                label(selected.name.as_str()).size(12).style(text::secondary),
            ]
            .spacing(8),
        );
    }

    content.width(Length::FillPortion(1)).into()
}

/// Bordered box that opens the picker on click and lights up while a file hovers
fn drop_zone<'a>(strings: &'static Strings, drag_hover: bool) -> Element<'a, Message> {
    let prompt = if drag_hover {
        strings.drop_release
    } else {
        strings.drop_prompt
    };

    let zone = container(
        column![
            label(prompt).size(16),
            label(strings.supported_types).size(13).style(text::secondary),
        ]
        .spacing(6)
        .align_x(Alignment::Center),
    )
    .padding(24)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .style(move |theme: &Theme| {
        let palette = theme.extended_palette();
        let (border_color, background) = if drag_hover {
            (palette.primary.strong.color, palette.background.strong.color)
        } else {
            (palette.background.strong.color, palette.background.weak.color)
        };
        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: border_color,
                width: 2.0,
                radius: 8.0.into(),
            },
            ..container::Style::default()
        }
    });

    mouse_area(zone).on_press(Message::BrowseClicked).into()
}

/// Right column: analyze button and whichever status panel applies
pub fn analysis_column<'a>(inspection: &'a Inspection, strings: &'static Strings) -> Element<'a, Message> {
    let button_label = if inspection.is_loading() {
        strings.analyzing_button
    } else {
        strings.analyze_button
    };

    let caption = label(button_label)
        .size(18)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    // No on_press means disabled
    let analyze = button(caption)
        .padding(12)
        .width(Length::Fill)
        .on_press_maybe(inspection.can_analyze().then_some(Message::AnalyzeClicked));

    let mut content: Column<'a, Message> = column![
        label(strings.analyze_heading).size(20).style(text::primary),
        analyze,
    ]
    .spacing(16);

    match inspection.status() {
        Status::Idle => {}
        Status::Ready => content = content.push(ready_panel(strings)),
        Status::Loading => content = content.push(loading_panel(strings)),
        Status::Failure(err) => content = content.push(error_panel(strings, strings.error_message(err))),
        Status::Success(analysis) => content = content.push(result_panel(
            strings,
            &analysis.text,
            analysis.completed_at.format("%H:%M:%S").to_string(),
        )),
    }

    content.width(Length::FillPortion(1)).into()
}

fn ready_panel<'a>(strings: &'static Strings) -> Element<'a, Message> {
    container(
        column![label(strings.ready_line_1), label(strings.ready_line_2).style(text::secondary)]
            .spacing(4)
            .align_x(Alignment::Center),
    )
    .padding(24)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .style(container::rounded_box)
    .into()
}

fn loading_panel<'a>(strings: &'static Strings) -> Element<'a, Message> {
    container(label(strings.loading_message).size(18))
        .padding(32)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .style(container::rounded_box)
        .into()
}

fn error_panel<'a>(strings: &'static Strings, message: String) -> Element<'a, Message> {
    container(
        column![
            label(strings.error_heading).font(Font { weight: iced::font::Weight::Bold, ..Font::DEFAULT }),
            label(message),
        ]
        .spacing(4),
    )
    .padding(16)
    .width(Length::Fill)
    .style(|theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            text_color: Some(palette.danger.strong.text),
            background: Some(Background::Color(palette.danger.weak.color)),
            border: Border {
                color: palette.danger.strong.color,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..container::Style::default()
        }
    })
    .into()
}

/// The model's answer exactly as returned, in a monospace font
fn result_panel<'a>(strings: &'static Strings, result: &'a str, completed_at: String) -> Element<'a, Message> {
    column![
        label(strings.result_heading).size(20).style(text::primary),
        container(scrollable(
            container(label(result).font(Font::MONOSPACE).size(14)).padding(16)
        ))
        .width(Length::Fill)
        .max_height(RESULT_HEIGHT)
        .style(container::rounded_box),
        label(format!("{} {}", strings.completed_at, completed_at))
            .size(12)
            .style(text::secondary),
    ]
    .spacing(12)
    .into()
}

pub fn footer<'a>(strings: &'static Strings) -> Element<'a, Message> {
    container(label(strings.footer).size(12).style(text::secondary))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

/// The whole page
pub fn page<'a>(inspection: &'a Inspection, strings: &'static Strings, drag_hover: bool) -> Element<'a, Message> {
    let body = row![
        upload_column(inspection, strings, drag_hover),
        analysis_column(inspection, strings),
    ]
    .spacing(32);

    scrollable(
        column![
            header(strings),
            Space::with_height(8),
            container(body).padding(24).style(container::rounded_box),
            footer(strings),
        ]
        .spacing(24)
        .padding(32)
        .max_width(1100),
    )
    .into()
}
