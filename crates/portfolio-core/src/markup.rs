//! Pure HTML templates: content in, markup string out. Nothing here touches
//! the DOM, which keeps every template testable off the browser.
//!
//! Content tables are trusted, so values are interpolated without escaping.

use crate::content::{FooterLink, HeroPill, NavLink, ProjectEntry, SocialLink};

/// Header and footer social icons use different chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialVariant {
    Header,
    Footer,
}

/// Concatenates one template over a whole table.
pub fn render_list<'a, T: 'a>(
    items: impl IntoIterator<Item = &'a T>,
    template: impl Fn(&T) -> String,
) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&template(item));
    }
    out
}

pub fn nav_link(nav: &NavLink) -> String {
    format!(
        "<a class=\"font-display font-medium text-black dark:text-white hover:opacity-70 \
         transition-opacity\" href=\"{href}\">{label}</a>",
        href = nav.href,
        label = nav.label,
    )
}

/// Footer navigation renders the same link inside a list item.
pub fn footer_nav_item(nav: &NavLink) -> String {
    format!("<li>{}</li>", nav_link(nav))
}

pub fn social_icon(social: &SocialLink, variant: SocialVariant) -> String {
    match variant {
        SocialVariant::Header => format!(
            "<a class=\"hover:scale-110 transition-transform p-1\" href=\"{url}\" \
             target=\"_blank\" aria-label=\"{platform}\">\
             <i class=\"{icon} text-xl\"></i></a>",
            url = social.url,
            platform = social.platform,
            icon = social.icon,
        ),
        SocialVariant::Footer => format!(
            "<a class=\"w-12 h-12 rounded-full border border-gray-400 dark:border-gray-600 \
             flex items-center justify-center hover:bg-gray-100 dark:hover:bg-gray-800 \
             transition-colors text-black dark:text-white\" href=\"{url}\" target=\"_blank\" \
             aria-label=\"{platform}\"><i class=\"{icon}\"></i></a>",
            url = social.url,
            platform = social.platform,
            icon = social.icon,
        ),
    }
}

pub fn hero_pill(pill: &HeroPill) -> String {
    let classes = format!(
        "hero-pill absolute {position} bg-pill-green text-black font-display font-medium \
         px-4 py-2 md:px-6 md:py-3 rounded-full hover:scale-110 transition-transform z-20 \
         shadow-lg border border-black/10 whitespace-nowrap text-sm md:text-base",
        position = pill.position,
    );
    let icon = match pill.icon {
        Some(icon) => format!(" <i class=\"{icon}\"></i>"),
        None => String::new(),
    };
    // Rotation goes through the standalone `rotate` property so animated
    // `transform` values never flatten the pill.
    match pill.href {
        Some(href) => format!(
            "<a class=\"{classes}\" style=\"rotate: {rotation}\" href=\"{href}\">{text}{icon}</a>",
            rotation = pill.rotation,
            text = pill.text,
        ),
        None => format!(
            "<div class=\"{classes} cursor-pointer\" style=\"rotate: {rotation}\">{text}{icon}</div>",
            rotation = pill.rotation,
            text = pill.text,
        ),
    }
}

pub fn tech_item(label: &&str) -> String {
    format!("<li>{label}</li>")
}

pub fn project_card(project: &ProjectEntry) -> String {
    let tags = render_list(project.tags, |tag| {
        format!(
            "<span class=\"px-3 py-1 text-xs font-display font-medium bg-white/20 \
             text-black dark:text-white rounded-full border border-white/10\">{tag}</span>"
        )
    });
    format!(
        "<div class=\"project-card group relative glass rounded-xl p-6\">\
         <h3 class=\"font-display font-bold text-xl md:text-2xl mb-3 text-black \
         dark:text-white\">{title}</h3>\
         <p class=\"text-gray-700 dark:text-gray-300 font-body text-sm md:text-base mb-4 \
         leading-relaxed\">{description}</p>\
         <div class=\"flex flex-wrap gap-2 mb-4\">{tags}</div>\
         <a href=\"{url}\" target=\"_blank\" class=\"inline-flex items-center space-x-2 \
         font-display font-medium text-black dark:text-white hover:opacity-70 \
         transition-opacity\"><span>View on GitHub</span>\
         <i class=\"fab fa-github text-lg\"></i></a></div>",
        title = project.title,
        description = project.description,
        url = project.repo_url,
    )
}

pub fn footer_link(link: &FooterLink) -> String {
    format!(
        "<a class=\"hover:underline\" href=\"{href}\">{label}</a>",
        href = link.href,
        label = link.label,
    )
}
