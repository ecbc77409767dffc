use chrono::{Datelike, NaiveDate, Timelike};
use shared::calendar_view::{self, CalendarView};
use shared::{CalendarEvent, SlotTime};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::date_utils::{chip_time, day_header, hour_label, today};

#[derive(Properties, PartialEq)]
pub struct CalendarGridProps {
    pub events: Vec<CalendarEvent>,
    pub loading: bool,
    pub on_event_click: Callback<CalendarEvent>,
}

#[function_component(CalendarGrid)]
pub fn calendar_grid(props: &CalendarGridProps) -> Html {
    let view = use_state(CalendarView::default);
    let anchor = use_state(today);

    let on_prev = {
        let view = view.clone();
        let anchor = anchor.clone();
        Callback::from(move |_: MouseEvent| {
            anchor.set(calendar_view::step(*view, *anchor, false));
        })
    };

    let on_next = {
        let view = view.clone();
        let anchor = anchor.clone();
        Callback::from(move |_: MouseEvent| {
            anchor.set(calendar_view::step(*view, *anchor, true));
        })
    };

    let on_today = {
        let anchor = anchor.clone();
        Callback::from(move |_: MouseEvent| anchor.set(today()))
    };

    let days = calendar_view::visible_days(*view, *anchor);

    html! {
        <div class="calendar-container">
            <div class="calendar-toolbar">
                <div class="toolbar-nav">
                    <button class="btn btn-outline" onclick={on_prev}>{"‹"}</button>
                    <button class="btn btn-outline" onclick={on_next}>{"›"}</button>
                    <button class="btn btn-outline" onclick={on_today}>{"Today"}</button>
                </div>
                <h2 class="calendar-title">{calendar_view::title(*view, *anchor)}</h2>
                <div class="toolbar-views">
                    {for CalendarView::ALL.iter().map(|option| {
                        let option = *option;
                        let class = if option == *view {
                            "btn btn-outline active"
                        } else {
                            "btn btn-outline"
                        };
                        let onclick = {
                            let view = view.clone();
                            Callback::from(move |_: MouseEvent| view.set(option))
                        };
                        html! { <button class={class} onclick={onclick}>{option.label()}</button> }
                    })}
                </div>
            </div>

            {if props.loading {
                html! { <div class="calendar-loading">{"Loading schedule..."}</div> }
            } else {
                html! {}
            }}

            {if view.is_time_grid() {
                render_time_grid(&props.events, &days, &props.on_event_click)
            } else {
                render_month_grid(&props.events, &days, *anchor, &props.on_event_click)
            }}
        </div>
    }
}

fn render_time_grid(
    events: &[CalendarEvent],
    days: &[NaiveDate],
    on_event_click: &Callback<CalendarEvent>,
) -> Html {
    let hours = calendar_view::hour_rows(events, days);
    let per_day: Vec<_> = days
        .iter()
        .map(|day| calendar_view::events_on(events, *day))
        .collect();

    html! {
        <table class="time-grid">
            <thead>
                <tr>
                    <th class="time-grid-axis"></th>
                    {for days.iter().map(|day| html! {
                        <th class="time-grid-day">{day_header(*day)}</th>
                    })}
                </tr>
            </thead>
            <tbody>
                {for hours.iter().map(|hour| html! {
                    <tr class="time-grid-row">
                        <td class="time-grid-axis">{hour_label(*hour)}</td>
                        {for per_day.iter().map(|day_events| html! {
                            <td class="time-grid-cell">
                                {for day_events
                                    .iter()
                                    .filter(|(start, _)| start.time_of_day().hour() == *hour)
                                    .map(|(start, event)| {
                                        render_event(event, start, on_event_click)
                                    })}
                            </td>
                        })}
                    </tr>
                })}
            </tbody>
        </table>
    }
}

fn render_month_grid(
    events: &[CalendarEvent],
    days: &[NaiveDate],
    anchor: NaiveDate,
    on_event_click: &Callback<CalendarEvent>,
) -> Html {
    html! {
        <div class="month-grid">
            {for ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"].iter().map(|name| html! {
                <div class="month-grid-heading">{*name}</div>
            })}
            {for days.iter().map(|day| {
                let class = if day.month() == anchor.month() {
                    "month-grid-day"
                } else {
                    "month-grid-day other-month"
                };
                html! {
                    <div class={class}>
                        <div class="day-number">{day.day()}</div>
                        {for calendar_view::events_on(events, *day)
                            .into_iter()
                            .map(|(start, event)| render_event(event, &start, on_event_click))}
                    </div>
                }
            })}
        </div>
    }
}

/// Event chip. Available slots keep their deep link as `href`, but the
/// click is handled in-app.
fn render_event(
    event: &CalendarEvent,
    start: &SlotTime,
    on_event_click: &Callback<CalendarEvent>,
) -> Html {
    let time_label = chip_time(start.time_of_day());
    let onclick = {
        let on_event_click = on_event_click.clone();
        let event = event.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_event_click.emit(event.clone());
        })
    };

    let tooltip = match &event.extended_props.user {
        Some(user) => format!("{} - {}", event.title, user.name),
        None => event.title.clone(),
    };

    html! {
        <a
            class={classes!("calendar-event", format!("event-{}", event.color.as_str()))}
            href={event.url.clone()}
            title={tooltip}
            style={format!("background-color: {}", event.color.as_str())}
            onclick={onclick}
        >
            <span class="event-time">{time_label}</span>
            <span class="event-title">{&event.title}</span>
        </a>
    }
}
