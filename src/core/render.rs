//! Server-side HTML for the listing, detail and form pages.
//!
//! Every function builds its container from scratch; nothing is patched
//! incrementally.

use crate::core::forms::{Acknowledgment, FormKind};
use crate::core::{LocationRecord, SiteSettings};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

pub const LOCATIONS_CONTAINER_ID: &str = "locations-container";
pub const SEARCH_INPUT_ID: &str = "search-input";

#[derive(Debug, Clone)]
pub struct Site {
    pub title: String,
    pub tagline: String,
}

impl Site {
    pub fn from_settings<S: SiteSettings + ?Sized>(settings: &S) -> Self {
        Self {
            title: settings.site_title().to_string(),
            tagline: settings.tagline().to_string(),
        }
    }
}

const CSS: &str = r#"
*{box-sizing:border-box}
body{margin:0;font-family:system-ui,sans-serif;background:#f6f5f2;color:#222}
nav{display:flex;gap:1.5rem;align-items:center;padding:.8rem 2rem;background:#1f2a36}
nav a{color:#d8e1ea;text-decoration:none}nav .brand{color:#fff;font-weight:700}
main{max-width:1100px;margin:0 auto;padding:1.5rem}
.search{display:flex;gap:.5rem;margin-bottom:1rem}
.search input{flex:1;padding:.6rem;border:1px solid #bbb;border-radius:6px}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(300px,1fr));gap:1rem}
.card{background:#fff;border-radius:8px;overflow:hidden;box-shadow:0 1px 3px rgba(0,0,0,.12)}
.card img,.detail img{width:100%;height:200px;object-fit:cover;background:#ddd}
.card-body{padding:1rem}.card-body h3{margin:.2rem 0}
.category{display:inline-block;background:#e7eef5;border-radius:4px;padding:2px 8px;font-size:.8rem}
.address{color:#666;font-size:.9rem}
.ack{background:#e3f4e8;border:1px solid #5fae78;padding:1rem;border-radius:6px}
form.stub label{display:block;margin-top:.8rem}
form.stub input,form.stub textarea{width:100%;padding:.5rem}
"#;

fn layout(site: &Site, page_title: &str, body: &str) -> String {
    let mut nav = String::new();
    for kind in FormKind::ALL {
        let _ = write!(nav, r#"<a href="{}">{}</a>"#, kind.path(), encode_text(kind.title()));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{page} | {site}</title><style>{css}</style></head>
<body>
<nav><a class="brand" href="/">{site}</a>{nav}</nav>
<main>
{body}
</main>
</body>
</html>"#,
        page = encode_text(page_title),
        site = encode_text(&site.title),
        css = CSS,
        nav = nav,
        body = body,
    )
}

pub fn detail_href(record: &LocationRecord) -> String {
    format!("/location?id={}", record.id)
}

/// One card per record.
pub fn render_card(record: &LocationRecord) -> String {
    format!(
        r#"<article class="card" data-id="{id}">
<img src="{image}" alt="{alt}">
<div class="card-body">
<span class="category">{category}</span>
<h3><a href="{href}">{name}</a></h3>
<p class="address">{address}</p>
</div>
</article>"#,
        id = record.id,
        image = encode_double_quoted_attribute(&record.image),
        alt = encode_double_quoted_attribute(&record.name),
        name = encode_text(&record.name),
        category = encode_text(&record.category),
        href = detail_href(record),
        address = encode_text(&record.address),
    )
}

/// The full content of the locations container for `records`.
pub fn render_cards(records: &[&LocationRecord]) -> String {
    if records.is_empty() {
        return r#"<p class="empty">No locations match your search.</p>"#.to_string();
    }
    records.iter().map(|r| render_card(r)).collect::<Vec<_>>().join("\n")
}

pub fn render_listing_page(site: &Site, query: &str, records: &[&LocationRecord]) -> String {
    let count = match records.len() {
        1 => "1 location".to_string(),
        n => format!("{} locations", n),
    };

    let body = format!(
        r#"<h1>{tagline}</h1>
<form class="search" method="get" action="/">
<input id="{input_id}" type="search" name="q" value="{query}"
 placeholder="Search by name, category or address" autofocus
 onfocus="this.setSelectionRange(this.value.length, this.value.length)"
 oninput="this.form.requestSubmit()">
<button type="submit">Search</button>
</form>
<p class="count">{count}</p>
<section id="{container_id}" class="grid">
{cards}
</section>"#,
        tagline = encode_text(&site.tagline),
        input_id = SEARCH_INPUT_ID,
        query = encode_double_quoted_attribute(query),
        count = count,
        container_id = LOCATIONS_CONTAINER_ID,
        cards = render_cards(records),
    );

    layout(site, "Locations", &body)
}

pub fn render_detail_page(site: &Site, record: &LocationRecord) -> String {
    let features = record
        .features
        .iter()
        .map(|f| format!("<li>{}</li>", encode_text(f)))
        .collect::<Vec<_>>()
        .join("");

    let body = format!(
        r#"<article class="detail">
<img id="location-image" src="{image}" alt="{alt}">
<h1 id="location-name">{name}</h1>
<span id="location-category" class="category">{category}</span>
<p id="location-address" class="address">{address}</p>
<p id="location-description">{description}</p>
<h2>Features</h2>
<ol id="location-features">{features}</ol>
<p><a href="{book}">Book this location</a> · <a href="/">Back to all locations</a></p>
</article>"#,
        image = encode_double_quoted_attribute(&record.image),
        alt = encode_double_quoted_attribute(&record.name),
        name = encode_text(&record.name),
        category = encode_text(&record.category),
        address = encode_text(&record.address),
        description = encode_text(&record.description),
        features = features,
        book = FormKind::Booking.path(),
    );

    layout(site, &record.name, &body)
}

/// Form page. Fields are always rendered empty, which is how a submitted form
/// gets reset.
pub fn render_form_page(site: &Site, kind: FormKind, ack: Option<&Acknowledgment>) -> String {
    let mut fields = String::new();
    for f in kind.fields() {
        let id = kind.element_id();
        let _ = write!(
            fields,
            r#"<label for="{id}-{name}">{label}</label>"#,
            name = f.name,
            label = encode_text(f.label)
        );
        if f.input_type == "textarea" {
            let _ = write!(
                fields,
                r#"<textarea id="{id}-{name}" name="{name}"></textarea>"#,
                name = f.name
            );
        } else {
            let _ = write!(
                fields,
                r#"<input id="{id}-{name}" name="{name}" type="{input_type}" value="">"#,
                name = f.name,
                input_type = f.input_type
            );
        }
    }

    let notice = ack
        .map(|a| format!(r#"<p class="ack" role="status">{}</p>"#, encode_text(a.message)))
        .unwrap_or_default();

    let body = format!(
        r#"<h1>{title}</h1>
{notice}
<form id="{id}" class="stub" method="post" action="{path}">
{fields}
<p><button type="submit">Submit</button></p>
</form>"#,
        title = encode_text(kind.title()),
        notice = notice,
        id = kind.element_id(),
        path = kind.path(),
        fields = fields,
    );

    layout(site, kind.title(), &body)
}
