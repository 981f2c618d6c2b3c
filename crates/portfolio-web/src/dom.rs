//! DOM plumbing: container rendering from the content tables and canvas
//! backing-size management. Every renderer treats a missing container as a
//! no-op so the page is free to omit sections.

use portfolio_core::constants::MAX_PIXEL_RATIO;
use portfolio_core::content;
use portfolio_core::markup::{self, SocialVariant};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// CSS viewport size in pixels.
pub fn viewport_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width as f32, height as f32)
}

/// Replace the content of `container_id` with `html`.
pub fn render_into(document: &web::Document, container_id: &str, html: &str) {
    if let Some(el) = document.get_element_by_id(container_id) {
        el.set_inner_html(html);
    }
}

pub fn render_nav(document: &web::Document) {
    render_into(
        document,
        "desktop-nav",
        &markup::render_list(content::NAVIGATION, markup::nav_link),
    );
}

pub fn render_header_social(document: &web::Document) {
    render_into(
        document,
        "header-social",
        &markup::render_list(content::header_social(), |s| {
            markup::social_icon(s, SocialVariant::Header)
        }),
    );
}

pub fn render_hero_pills(document: &web::Document) {
    render_into(
        document,
        "hero-pills",
        &markup::render_list(content::HERO_PILLS, markup::hero_pill),
    );
}

pub fn render_tech_stack(document: &web::Document) {
    render_into(
        document,
        "tech-stack",
        &markup::render_list(content::TECH_STACK, markup::tech_item),
    );
}

/// Render project cards into the grid. The landing page passes
/// `featured_only`; an archive page could render the full table.
pub fn render_projects(document: &web::Document, featured_only: bool) {
    let html = if featured_only {
        markup::render_list(content::featured_projects(), markup::project_card)
    } else {
        markup::render_list(content::PROJECTS, markup::project_card)
    };
    render_into(document, "projects-grid", &html);
}

pub fn render_footer(document: &web::Document) {
    render_into(
        document,
        "footer-social",
        &markup::render_list(content::SOCIAL_LINKS, |s| {
            markup::social_icon(s, SocialVariant::Footer)
        }),
    );
    render_into(
        document,
        "footer-nav",
        &markup::render_list(content::NAVIGATION, markup::footer_nav_item),
    );
    render_into(
        document,
        "footer-links",
        &markup::render_list(content::FOOTER_LINKS, markup::footer_link),
    );
    if let Some(el) = document.get_element_by_id("footer-tagline") {
        el.set_text_content(Some(content::SITE.tagline));
    }
    if let Some(el) = document.get_element_by_id("footer-copyright") {
        el.set_text_content(Some(content::SITE.copyright));
    }
}

/// Render every section the page declares a container for.
pub fn render_page(document: &web::Document) {
    render_nav(document);
    render_header_social(document);
    render_hero_pills(document);
    render_tech_stack(document);
    render_projects(document, true);
    render_footer(document);
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

/// Maintain the canvas internal pixel size at CSS size * devicePixelRatio,
/// with the ratio capped at [`MAX_PIXEL_RATIO`].
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
