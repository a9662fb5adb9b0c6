// templates.rs

use crate::db::crawls::CrawlRun;
use maud::{html, Markup, DOCTYPE};

fn format_ts(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}

pub fn status_page(room_count: i64, crawls: &[CrawlRun]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Room Listings" }
            }
            body {
                h1 { "Room Listings" }
                p { (room_count) " rooms registered" }

                h2 { "Recent Crawls" }
                table style="border-collapse: collapse; font-size: 0.9em;" {
                    thead {
                        tr {
                            th style="padding: 8px; text-align: left; border-bottom: 2px solid #eee;" { "ID" }
                            th style="padding: 8px; text-align: left; border-bottom: 2px solid #eee;" { "Target" }
                            th style="padding: 8px; text-align: left; border-bottom: 2px solid #eee;" { "Room" }
                            th style="padding: 8px; text-align: left; border-bottom: 2px solid #eee;" { "Started" }
                            th style="padding: 8px; text-align: left; border-bottom: 2px solid #eee;" { "Status" }
                        }
                    }
                    tbody {
                        @for run in crawls {
                            tr {
                                td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (run.id) }
                                td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (run.target) }
                                td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (run.room_id) }
                                td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (format_ts(run.started_at)) }
                                td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                    @if run.finished_at.is_none() {
                                        span style="color: #6b7280;" { "running" }
                                    } @else if run.success {
                                        span style="color: #10b981;" { "ok" }
                                    } @else {
                                        span style="color: #ef4444;" {
                                            (run.error_message.as_deref().unwrap_or("failed"))
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
