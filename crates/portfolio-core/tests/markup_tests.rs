// Host-side tests for content tables and HTML templates.

use portfolio_core::content::{
    self, featured_projects, header_social, FOOTER_LINKS, HERO_PILLS, NAVIGATION, PROJECTS, SITE,
    SOCIAL_LINKS, TECH_STACK,
};
use portfolio_core::markup::{
    footer_link, footer_nav_item, hero_pill, nav_link, project_card, render_list, social_icon,
    tech_item, SocialVariant,
};

#[test]
fn content_tables_are_populated() {
    assert!(!NAVIGATION.is_empty());
    assert!(!SOCIAL_LINKS.is_empty());
    assert!(!HERO_PILLS.is_empty());
    assert!(!TECH_STACK.is_empty());
    assert!(!PROJECTS.is_empty());
    assert!(!FOOTER_LINKS.is_empty());
    assert!(!SITE.tagline.is_empty());
    assert!(!SITE.copyright.is_empty());
}

#[test]
fn featured_projects_filter_and_keep_order() {
    let featured: Vec<_> = featured_projects().collect();
    assert!(!featured.is_empty());
    assert!(featured.len() < PROJECTS.len(), "some projects stay off the landing page");
    for p in &featured {
        assert!(p.featured);
    }

    let all_featured: Vec<_> = PROJECTS.iter().filter(|p| p.featured).collect();
    for (a, b) in featured.iter().zip(&all_featured) {
        assert_eq!(a.title, b.title, "table order must be preserved");
    }
}

#[test]
fn header_social_respects_visibility_flag() {
    for social in header_social() {
        assert!(social.show_in_header);
    }
}

#[test]
fn nav_link_carries_label_and_href() {
    let html = nav_link(&NAVIGATION[0]);
    assert!(html.starts_with("<a "));
    assert!(html.contains(NAVIGATION[0].label));
    assert!(html.contains(&format!("href=\"{}\"", NAVIGATION[0].href)));
}

#[test]
fn footer_nav_item_wraps_the_link_in_a_list_item() {
    let html = footer_nav_item(&NAVIGATION[1]);
    assert!(html.starts_with("<li>"));
    assert!(html.ends_with("</li>"));
    assert!(html.contains(NAVIGATION[1].label));
}

#[test]
fn render_list_concatenates_in_table_order() {
    let html = render_list(NAVIGATION, nav_link);
    let mut last = 0;
    for nav in NAVIGATION {
        let at = html.find(nav.label).unwrap_or_else(|| panic!("{} missing", nav.label));
        assert!(at >= last, "{} rendered out of order", nav.label);
        last = at;
    }
}

#[test]
fn social_icon_variants_use_different_chrome() {
    let social = &SOCIAL_LINKS[0];
    let header = social_icon(social, SocialVariant::Header);
    let footer = social_icon(social, SocialVariant::Footer);
    assert_ne!(header, footer);
    assert!(header.contains("hover:scale-110"));
    assert!(footer.contains("rounded-full"));
    for html in [&header, &footer] {
        assert!(html.contains(social.icon));
        assert!(html.contains(&format!("aria-label=\"{}\"", social.platform)));
        assert!(html.contains("target=\"_blank\""));
    }
}

#[test]
fn hero_pill_renders_div_when_not_a_link() {
    let plain = HERO_PILLS.iter().find(|p| p.href.is_none()).unwrap();
    let html = hero_pill(plain);
    assert!(html.starts_with("<div "));
    assert!(!html.contains("<a "));
    assert!(html.contains("cursor-pointer"));
    assert!(html.contains(plain.text));
}

#[test]
fn hero_pill_renders_anchor_with_rotation_style() {
    let linked = HERO_PILLS.iter().find(|p| p.href.is_some()).unwrap();
    let html = hero_pill(linked);
    assert!(html.starts_with("<a "));
    assert!(html.contains(&format!("rotate: {}", linked.rotation)));
    assert!(html.contains(linked.position));
}

#[test]
fn hero_pill_icon_is_optional() {
    let with_icon = HERO_PILLS.iter().find(|p| p.icon.is_some()).unwrap();
    let without = HERO_PILLS.iter().find(|p| p.icon.is_none()).unwrap();
    assert!(hero_pill(with_icon).contains("<i class="));
    assert!(!hero_pill(without).contains("<i class="));
}

#[test]
fn project_card_shows_every_field() {
    let project = &PROJECTS[0];
    let html = project_card(project);
    assert!(html.contains("project-card"));
    assert!(html.contains(project.title));
    assert!(html.contains(project.description));
    assert!(html.contains(&format!("href=\"{}\"", project.repo_url)));
    for tag in project.tags {
        assert!(html.contains(tag), "tag {tag} missing from card");
    }
    assert!(html.contains("View on GitHub"));
}

#[test]
fn tech_items_render_as_list_entries() {
    let html = render_list(TECH_STACK, tech_item);
    for label in TECH_STACK {
        assert!(html.contains(&format!("<li>{label}</li>")));
    }
}

#[test]
fn footer_link_renders_minimal_anchor() {
    let link = &FOOTER_LINKS[0];
    let html = footer_link(link);
    assert!(html.contains("hover:underline"));
    assert!(html.contains(link.label));
}

#[test]
fn every_project_declares_an_accent_and_motion() {
    // Closed enums make the dispatch total; this guards the table against a
    // stray duplicate accent wipe during edits.
    use portfolio_core::content::Accent;
    let accents: Vec<Accent> = content::PROJECTS.iter().map(|p| p.accent).collect();
    assert!(accents.contains(&Accent::Pink));
    assert!(accents.contains(&Accent::Blue));
    for p in PROJECTS {
        assert!(!p.accent.css().is_empty());
        assert!(p.accent.css().starts_with('#'));
        assert!(!p.hover.touched_props().is_empty());
    }
}
