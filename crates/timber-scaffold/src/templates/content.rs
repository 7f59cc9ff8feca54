//! Text content of generated theme files

/// Base layout every page template extends
pub const BASE_LAYOUT: &str = "base.twig";

/// WordPress theme header for the main `style.css`
pub fn render_stylesheet_header(theme_name: &str, author: &str) -> String {
    format!(
        "/*\n  * Theme Name: {theme_name}\n  * Description:\n  * Author: {author}.\n*/\n  "
    )
}

/// Timber page controller that renders `<page>.twig`
pub fn render_controller(page: &str) -> String {
    format!(
        r#"<?php
/**
* Template name: {page}
*
* @package  WordPress
* @subpackage  Timber
* @since    Timber 0.1
*/

$context = Timber::get_context();
$post = new TimberPost();

$context['post'] = $post;

Timber::render( array( '{page}.twig' ), $context );
"#
    )
}

/// Twig page template
///
/// The stylesheet link always points at the compiled `styles/css/` output,
/// whatever folder the preprocessor sources live in.
pub fn render_markup(page: &str) -> String {
    format!(
        r#"{{% extends "{BASE_LAYOUT}" %}}

{{% block content %}}
<p>{page} page</p>
{{% endblock %}}

{{% block js %}}
{{% endblock %}}

{{% block head %}}
    <link rel="stylesheet" href="{{{{ site.theme.link }}}}/styles/css/{page}.css"/>
{{% endblock %}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_header_embeds_values_verbatim() {
        let header = render_stylesheet_header("Acme", "J. Doe");
        assert!(header.starts_with("/*\n"));
        assert!(header.contains("* Theme Name: Acme\n"));
        assert!(header.contains("* Author: J. Doe.\n"));
        assert!(header.contains("* Description:\n"));
    }

    #[test]
    fn test_stylesheet_header_has_no_other_dynamic_fields() {
        let a = render_stylesheet_header("Acme", "J. Doe");
        let b = render_stylesheet_header("Acme", "J. Doe");
        assert_eq!(a, b);
        assert_eq!(
            a.replace("Acme", "").replace("J. Doe", ""),
            render_stylesheet_header("", "")
        );
    }

    #[test]
    fn test_controller_binds_template() {
        let php = render_controller("about");
        assert!(php.starts_with("<?php\n"));
        assert!(php.contains("* Template name: about\n"));
        assert!(php.contains("Timber::render( array( 'about.twig' ), $context );"));
    }

    #[test]
    fn test_markup_extends_base_and_links_css() {
        let twig = render_markup("contact");
        assert!(twig.starts_with("{% extends \"base.twig\" %}\n"));
        assert!(twig.contains("<p>contact page</p>"));
        assert!(twig.contains(
            "<link rel=\"stylesheet\" href=\"{{ site.theme.link }}/styles/css/contact.css\"/>"
        ));
        assert!(twig.contains("{% block js %}\n{% endblock %}"));
    }

    #[test]
    fn test_empty_page_renders_empty_label() {
        let twig = render_markup("");
        assert!(twig.contains("<p> page</p>"));
        assert!(twig.contains("/styles/css/.css"));

        let php = render_controller("");
        assert!(php.contains("array( '.twig' )"));
    }

    #[test]
    fn test_no_sanitization() {
        let twig = render_markup("../odd name");
        assert!(twig.contains("<p>../odd name page</p>"));
    }
}
