use crate::types::StarredRepo;

/// Template of the displayed favorite. The class names line up with the
/// dashboard styles shipped alongside this feature.
const FAVORITE_TEMPLATE: &str = concat!(
    "<div class=\"box-header\">",
    "<h3 class=\"gh-random-favorite__heading box-title\">From your favorites</h3>",
    "</div>",
    "<div class=\"box-body starred-repo public source\">",
    "<span class=\"mega-octicon octicon-repo\"></span>",
    "<span class=\"starring-container\">",
    "<h4 class=\"gh-random-favorite__sub-heading\">",
    "<a href=\"{{html_url}}\" class=\"js-navigation-open\"><i>{{user}}</i>/{{name}}</a>",
    "</h4>",
    "<p class=\"description\">{{description}}</p>",
    "</span>",
    "</div>"
);

const CONTAINER_CLASS: &str = "gh-random-favorite box box-small";

/// Escapes HTML tag delimiters in a string.
pub fn escape_html(value: &str) -> String {
    value.replace('<', "&lt;").replace('>', "&gt;")
}

/// Replaces every `{{key}}` placeholder with the matching field value,
/// escaping each value before substitution. Placeholders without a
/// matching field are left verbatim.
pub fn render(template: &str, fields: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in fields {
        out = out.replace(&format!("{{{{{}}}}}", key), &escape_html(value));
    }
    out
}

/// Renders one starred repository into the sidebar fragment, container
/// element included. The embedding page inserts this as the sidebar's
/// first child.
pub fn render_favorite(repo: &StarredRepo) -> String {
    let body = render(
        FAVORITE_TEMPLATE,
        &[
            ("html_url", repo.html_url.as_str()),
            ("user", repo.owner.login.as_str()),
            ("name", repo.name.as_str()),
            ("description", repo.description.as_deref().unwrap_or("")),
        ],
    );
    format!("<div class=\"{}\">{}</div>", CONTAINER_CLASS, body)
}
