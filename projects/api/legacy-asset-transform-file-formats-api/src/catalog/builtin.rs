//! Resources shipped in the game executable.

use super::ResourceKind::{self, *};

/// `(resource key, logical name, kind)` of every resource worth extracting.
///
/// Unused resources (icons, version info, leftover prototypes) are not listed.
#[rustfmt::skip]
pub(crate) const BUILTIN_RESOURCES: &[(&str, &str, ResourceKind)] = &[
    // Sprites
    ("2_3000_0.bmp", "sleigh", Bitmap),
    ("2_3001_0.bmp", "reindeer", Bitmap),
    ("2_3002_0.bmp", "gift1", Bitmap),
    ("2_3003_0.bmp", "gift2", Bitmap),
    ("2_3004_0.bmp", "shield", Bitmap),
    ("2_3005_0.bmp", "shieldBalloon", Bitmap),
    ("2_3006_0.bmp", "gift3", Bitmap),
    ("2_3007_0.bmp", "star", Bitmap),
    ("2_3008_0.bmp", "smallStar", Bitmap),
    ("2_3009_0.bmp", "snowman", Bitmap),
    ("2_3010_0.bmp", "goblin", Bitmap),
    ("2_3011_0.bmp", "goblinSnowball", Bitmap),
    ("2_3013_0.bmp", "font", Bitmap),
    ("2_3015_0.bmp", "electrocutedSleigh", Bitmap),
    ("2_3016_0.bmp", "electrocutedReindeer", Bitmap),
    ("2_3017_0.bmp", "wineBalloon", Bitmap),
    ("2_3018_0.bmp", "cashBalloon", Bitmap),
    ("2_3019_0.bmp", "giftBalloon", Bitmap),
    ("2_3020_0.bmp", "heartBalloon", Bitmap),
    ("2_3021_0.bmp", "bigStar", Bitmap),
    ("2_3022_0.bmp", "points10", Bitmap),
    ("2_3023_0.bmp", "points15", Bitmap),
    ("2_3024_0.bmp", "points20", Bitmap),
    ("2_3026_0.bmp", "angel", Bitmap),
    ("2_3027_0.bmp", "cloud", Bitmap),
    ("2_3028_0.bmp", "drunkStar", Bitmap),
    ("2_3029_0.bmp", "smallDrunkStar", Bitmap),
    ("2_3034_0.bmp", "timeScoreIcon", Bitmap),
    ("2_3035_0.bmp", "damageScoreIcon", Bitmap),
    ("2_3036_0.bmp", "giftScoreIcon", Bitmap),
    ("2_3037_0.bmp", "finish", Bitmap),
    ("2_3051_0.bmp", "landscape", Bitmap),
    ("2_3053_0.bmp", "background", Bitmap),

    // Level
    ("CDXMAPPY_5000_0", "level", TileMap),

    // Splash screens
    ("JPEG_9003_0", "lostDueToDamageSplash", Jpeg),
    ("JPEG_9004_0", "wonSplash", Jpeg),
    ("JPEG_9005_0", "lostDueToTimeSplash", Jpeg),
    ("JPEG_9006_0", "helpSplash1", Jpeg),
    ("JPEG_9007_0", "helpSplash2", Jpeg),

    // Music
    ("MIDI_10000_0", "music", Midi),

    // Sound effects
    ("WAV_8000_0", "giftCollidedWithGround", Wave),
    ("WAV_8001_0", "snowmanLaunch", Wave),
    ("WAV_8002_0", "wineBalloon", Wave),
    ("WAV_8003_0", "sleighCollidedWithCloud", Wave),
    ("WAV_8004_0", "cashBalloon", Wave),
    ("WAV_8006_0", "sleighCollidedWithLevelTile1", Wave),
    ("WAV_8007_0", "sleighCollidedWithLevelTile2", Wave),
    ("WAV_8008_0", "dog", Wave),
    ("WAV_8009_0", "bell", Wave),
    ("WAV_8010_0", "goblinThrowSnowball", Wave),
    ("WAV_8011_0", "sleighCollidedWithNpc", Wave),
    ("WAV_8012_0", "giftCollidedWithChimney", Wave),
    ("WAV_8013_0", "shieldBalloon", Wave),
    ("WAV_8014_0", "giftBalloon", Wave),
    ("WAV_8015_0", "won", Wave),
    ("WAV_8016_0", "lost", Wave),
];
