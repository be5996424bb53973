use crate::config::{AlbumConfig, PAGE_PLACEHOLDER};

/// One album page. `number` is the 1-based page number shown in the footer
/// and substituted into the image template; `index` is the 0-based position
/// reported by the flip surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageAsset {
    pub index: usize,
    pub number: usize,
    pub image_src: String,
}

pub fn image_src_for(template: &str, number: usize) -> String {
    template.replace(PAGE_PLACEHOLDER, &number.to_string())
}

pub fn page_assets(config: &AlbumConfig) -> Vec<PageAsset> {
    (0..config.total_pages)
        .map(|index| PageAsset {
            index,
            number: index + 1,
            image_src: image_src_for(&config.page_image_template, index + 1),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assets_follow_naming_convention() {
        let config = AlbumConfig {
            total_pages: 3,
            ..AlbumConfig::default()
        };
        let assets = page_assets(&config);
        assert_eq!(assets.len(), 3);
        assert_eq!(assets[0].index, 0);
        assert_eq!(assets[0].number, 1);
        assert_eq!(assets[0].image_src, "photos/1.jpg");
        assert_eq!(assets[2].image_src, "photos/3.jpg");
    }

    #[test]
    fn template_substitution_is_positional() {
        assert_eq!(image_src_for("a/{page}/b-{page}.png", 7), "a/7/b-7.png");
    }
}
