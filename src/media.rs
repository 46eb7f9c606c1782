//! Project showcase data and media classification.

/// A showcased project card. All records are static; nothing is fetched
/// or mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub media: &'static str,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
}

/// Extensions rendered with an `<img>` tag.
const IMAGE_EXTENSIONS: [&str; 6] = ["gif", "png", "jpg", "jpeg", "webp", "svg"];

/// How a media path gets rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify by extension, case-insensitively. Anything that is not a
    /// recognized still-image extension falls through to the video path,
    /// including unknown and missing extensions.
    pub fn from_path(path: &str) -> Self {
        let ext = path.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
        match ext {
            Some(ext) if IMAGE_EXTENSIONS.contains(&ext.as_str()) => MediaKind::Image,
            _ => MediaKind::Video,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_still_image_extensions_render_as_images() {
        for path in [
            "/images/demo.gif",
            "/images/robot.png",
            "/images/profile.jpg",
            "/images/profile.jpeg",
            "/images/board.webp",
            "/images/logo.svg",
        ] {
            assert_eq!(MediaKind::from_path(path), MediaKind::Image, "{path}");
        }
    }

    #[test]
    fn test_classification_ignores_case() {
        assert_eq!(MediaKind::from_path("/images/DEMO.GIF"), MediaKind::Image);
        assert_eq!(MediaKind::from_path("/images/Clip.Mp4"), MediaKind::Video);
    }

    #[test]
    fn test_video_extensions_render_as_video() {
        assert_eq!(MediaKind::from_path("/images/go2demo.mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_path("/images/run.webm"), MediaKind::Video);
    }

    #[test]
    fn test_unrecognized_paths_default_to_video() {
        // Current behavior: no rejection path, anything unclassified is
        // treated as video.
        assert_eq!(MediaKind::from_path("/images/readme.txt"), MediaKind::Video);
        assert_eq!(MediaKind::from_path("/images/noextension"), MediaKind::Video);
        assert_eq!(MediaKind::from_path(""), MediaKind::Video);
    }
}
