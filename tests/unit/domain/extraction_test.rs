// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use jobcrawlrs::domain::models::document::Document;
use jobcrawlrs::domain::services::deadline_extractor::DeadlineExtractor;
use jobcrawlrs::domain::services::title_extractor::TitleExtractor;
use url::Url;

#[test]
fn test_title_and_deadline_from_one_page() {
    let doc = Document::parse(
        Url::parse("https://acme.test/jobs/12").unwrap(),
        r#"<html><head><title>Jobs</title></head><body>
            <article>
              <h1 class="entry-title">Junior Accountant</h1>
              <p>Salary: negotiable. Job type: full time.</p>
              <p>Applications close: 28 Feb 2025</p>
            </article>
        </body></html>"#,
    );
    let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    assert_eq!(TitleExtractor::default().extract(&doc), "Junior Accountant");
    assert_eq!(
        DeadlineExtractor::default().extract_deadline(&doc, today),
        NaiveDate::from_ymd_opt(2025, 2, 28)
    );
}

#[test]
fn test_page_without_heading_uses_sentinel() {
    let doc = Document::parse(
        Url::parse("https://acme.test/jobs/13").unwrap(),
        "<p>Deadline: 01/03/2025</p>",
    );

    assert_eq!(TitleExtractor::default().extract(&doc), "Title not found");
}
