//! Card content and settings.
//!
//! Every string the page shows comes from here. The compiled-in defaults are
//! the full card; the host may pass a JSON override to `init`, where any
//! missing field falls back to its default.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

use crate::card::confirmation::ESCALATION_STEPS;
use crate::card::narrative::NARRATIVE_LINES;
use crate::error::{CardError, CardResult};

/// A single entry of the memory timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Memory {
    fn text(description: &str) -> Self {
        Self {
            description: description.to_string(),
            image_url: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverConfig {
    pub title: String,
    pub subtitle: String,
    pub open_label: String,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            title: "Happy Birthday, My Love".into(),
            subtitle: "Aku punya sesuatu yang spesial untukmu...".into(),
            open_label: "Buka Hadiahmu".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub headline: String,
    pub dedication: String,
    pub background_url: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            headline: "Barakallahu Fii Umrik my Darling".into(),
            dedication: "dear to Intan Payou / Mak Ijah / ceceu / Momoy".into(),
            background_url: "https://picsum.photos/1920/1080?grayscale&blur=2".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeConfig {
    pub title: String,
    pub years: u32,
    pub blurb: String,
}

impl Default for AgeConfig {
    fn default() -> Self {
        Self {
            title: "Selamat Dua Puluh Tahun".into(),
            years: 20,
            blurb: "Dua dekade yang luar biasa telah kamu lewati, dan aku bersyukur bisa menjadi bagian dari ceritamu. Perjalanan kita baru saja dimulai.".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CandleConfig {
    pub title: String,
    pub prompt: String,
    pub button: String,
    pub blown_message: String,
}

impl Default for CandleConfig {
    fn default() -> Self {
        Self {
            title: "Waktunya Tiup Lilin!".into(),
            prompt: "Buat permohonan dan tiup lilinnya!".into(),
            button: "Tiup Lilin!".into(),
            blown_message: "Horeee! Semoga semua harapanmu terkabul!".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    pub title: String,
    pub salutation: String,
    pub paragraphs: Vec<String>,
    pub signature: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            title: "Ucapanku Untukmu".into(),
            salutation: "Untuk kekasih hatiku,".into(),
            paragraphs: vec![
                "Selamat ulang tahun, cintaku. Hari ini adalah hari di mana dunia diberkati dengan kehadiranmu, dan aku adalah orang yang paling beruntung karena bisa memilikimu dalam hidupku. Setiap hari bersamamu adalah anugerah yang tak ternilai.".into(),
                "Kamu adalah cahayaku di saat gelap, alasanku untuk tersenyum, dan inspirasiku untuk menjadi orang yang lebih baik. Terima kasih untuk semua cinta, tawa, dan dukungan yang tak pernah berhenti kamu berikan.".into(),
                "Aku sangat mencintaimu, lebih dari kata-kata yang bisa kuucapkan. Selamat bertambah usia, sayang.".into(),
            ],
            signature: "- Dengan Penuh Cinta".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoriesConfig {
    pub title: String,
    pub intro: String,
    pub items: Vec<Memory>,
}

impl Default for MemoriesConfig {
    fn default() -> Self {
        Self {
            title: "Kenangan Indah Kita".into(),
            intro: "Setiap momen ini adalah kepingan puzzle yang membentuk cerita kita. Mari kita lihat kembali perjalanan indah yang telah kita lalui bersama.".into(),
            items: vec![
                Memory::text("Ingat waktu kita pertama kali ketemu? Aku nggak akan pernah lupa senyum manismu hari itu. Momen itu mengubah segalanya."),
                Memory::text("Perjalanan pertama kita ke pantai. Kita lari-larian dikejar ombak, ketawa sampai sakit perut. Hari itu aku sadar, aku mau lebih banyak hari seperti ini sama kamu."),
                Memory::text("Malam saat kita nonton bintang sambil cerita semua mimpi kita. Di bawah langit yang sama, aku berjanji dalam hati untuk bantu kamu wujudkan semua mimpimu."),
                Memory::text("Waktu kamu lagi sedih dan aku coba hibur dengan lelucon garingku. Bukannya ketawa, kamu malah nangis di pelukanku. Saat itu aku tahu, hatiku akan selalu jadi tempatmu pulang."),
                Memory::text("Setiap momen sederhana, seperti minum kopi pagi atau nonton film di rumah, jadi luar biasa karena ada kamu di sampingku."),
                Memory::text("Momen saat kita kehujanan dan berteduh di warung kecil, itu jadi salah satu kenangan favoritku."),
                Memory::text("Pertama kali aku masakin buat kamu. Walaupun rasanya mungkin aneh, tapi kamu tetap bilang enak. Terima kasih ya."),
                Memory::text("Saat kita nyanyi bareng di mobil, nggak peduli suara fals dan lirik salah semua. Yang penting kita bahagia."),
                Memory::text("Waktu kita begadang sampai pagi cuma buat ngobrolin hal-hal nggak penting. Aku rindu momen-momen itu."),
                Memory::text("Hari di mana kamu kenalin aku ke teman-temanmu. Aku merasa jadi orang paling beruntung di dunia."),
                Memory::text("Setiap 'selamat pagi' dan 'selamat malam' darimu selalu berhasil membuat hariku lebih baik."),
                Memory::text("Ingat saat kita mencoba resep baru dan dapurnya jadi berantakan? Itu kekacauan yang paling menyenangkan."),
                Memory::text("Caramu menatapku saat aku sedang bercerita, seolah-olah aku satu-satunya orang di dunia ini."),
                Memory::text("Momen saat kita saling diam, tapi tetap merasa nyaman karena tahu kita ada untuk satu sama lain."),
                Memory::text("Ketika kamu memberiku semangat saat aku merasa gagal. Kamu adalah suporter terbaikku."),
                Memory::text("Jalan-jalan sore tanpa tujuan, hanya menikmati kebersamaan kita. Aku suka itu."),
                Memory::text("Melihatmu tertawa lepas karena leluconku adalah musik terindah buatku."),
                Memory::text("Saat kamu memegang tanganku untuk pertama kalinya. Aku masih bisa merasakan debaran jantungku saat itu."),
                Memory::text("Momen saat kita menyadari bahwa kita punya mimpi masa depan yang sama. Itu meyakinkan hatiku."),
                Memory::text("Dan hari ini, di ulang tahunmu, adalah kenangan baru yang akan selalu aku simpan. Aku mencintaimu."),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    pub title: String,
    pub intro: String,
    pub placeholder: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            title: "Video Spesial Untukmu".into(),
            intro: "Aku sudah menyiapkan video singkat yang merangkum perjalanan kita. Semoga kamu suka!".into(),
            placeholder: "Video akan diputar di sini".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WishConfig {
    pub title: String,
    pub prompt: String,
    pub placeholder: String,
    pub submit_label: String,
    pub sending_label: String,
    pub thanks: String,
    pub edit_label: String,
}

impl Default for WishConfig {
    fn default() -> Self {
        Self {
            title: "Harapanmu Untuk Kita".into(),
            prompt: "Sekarang giliranmu, tuliskan apa harapanmu untuk hubungan kita ke depannya di sini...".into(),
            placeholder: "Aku berharap kita...".into(),
            submit_label: "Kirim Harapan".into(),
            sending_label: "Harapanmu sedang dikirim...".into(),
            thanks: "Terima kasih sudah menuliskan harapanmu, sayang!".into(),
            edit_label: "Ubah Harapan".into(),
        }
    }
}

/// One "are you sure" prompt. The last escalation has no button and
/// advances on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Escalation {
    pub text: String,
    #[serde(default)]
    pub button: Option<String>,
}

impl Escalation {
    fn new(text: &str, button: Option<&str>) -> Self {
        Self {
            text: text.to_string(),
            button: button.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionConfig {
    pub title: String,
    pub teaser: String,
    pub open_label: String,
    pub narrative: Vec<String>,
    pub prompt: String,
    pub yes_label: String,
    pub no_label: String,
    pub no_alert: String,
    pub escalation: Vec<Escalation>,
    pub salting: String,
    pub final_message: String,
}

impl Default for QuestionConfig {
    fn default() -> Self {
        Self {
            title: "Satu Pertanyaan Penting...".into(),
            teaser: "Sebagai penutup, aku punya satu pertanyaan terakhir untukmu...".into(),
            open_label: "Buka Pertanyaan".into(),
            narrative: vec![
                "Sebelum aku bertanya, dengarkan dulu ya...".into(),
                "Sejak hari pertama kita ketemu, hidupku jadi lebih berwarna.".into(),
                "Kamu yang selalu sabar menghadapi semua tingkahku.".into(),
                "Kamu yang selalu ada, di hari terbaik maupun hari terburukku.".into(),
                "Aku sudah lama memikirkan ini, dan hatiku selalu kembali ke jawaban yang sama.".into(),
                "Aku ingin terus berjalan di sampingmu.".into(),
                "Hari ini, hari ulang tahunmu...".into(),
                "Aku mau bertanya satu hal yang paling penting.".into(),
            ],
            prompt: "Will you be my girlfriend, again and forever?".into(),
            yes_label: "Yes!".into(),
            no_label: "No".into(),
            no_alert: "Yakin? Coba klik 'Yes' deh :)".into(),
            escalation: vec![
                Escalation::new("Apakah kamu yakin?", Some("Iya, yakin banget!")),
                Escalation::new("Nggak nyesel kan?", Some("Nggak akan pernah!")),
                Escalation::new("Beneran serius nih??", Some("Serius pake banget!")),
                Escalation::new("Oke, aku pegang janjimu ya...", None),
            ],
            salting: "yeaaaayyyy (salting)".into(),
            final_message: "SO NOW I CAN CALL U MY DARLING😘😜❤️".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub sign_off: String,
    pub credit: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            sign_off: "I Love You".into(),
            credit: "Dibuat dengan ❤️ untuk orang yang paling kusukai.".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    pub title: String,
    pub text: String,
    pub label: String,
    pub copied_label: String,
    pub failure_alert: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            title: "Ucapan Spesial Untukmu!".into(),
            text: "Aku punya sesuatu yang spesial untukmu...".into(),
            label: "Bagikan Ucapan Ini".into(),
            copied_label: "Link Disalin!".into(),
            failure_alert: "Gagal menyalin link. Coba salin manual dari browser.".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub src: String,
    pub volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            src: "https://cdn.pixabay.com/audio/2022/02/14/audio_29c03a985c.mp3".into(),
            volume: 0.3,
        }
    }
}

/// Complete card content plus the logging level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub log_level: LogLevel,
    pub cover: CoverConfig,
    pub header: HeaderConfig,
    pub age: AgeConfig,
    pub candle: CandleConfig,
    pub greeting: GreetingConfig,
    pub memories: MemoriesConfig,
    pub video: VideoConfig,
    pub wish: WishConfig,
    pub question: QuestionConfig,
    pub footer: FooterConfig,
    pub share: ShareConfig,
    pub audio: AudioConfig,
}

/// Log verbosity, mirrored onto a `tracing` level filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_tracing(self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

impl CardConfig {
    /// Parse a JSON override. An empty string yields the defaults.
    pub fn from_json(json: &str) -> CardResult<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: CardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the shape the reveal tracks rely on.
    pub fn validate(&self) -> CardResult<()> {
        if self.question.narrative.len() != NARRATIVE_LINES {
            return Err(CardError::NarrativeLength {
                expected: NARRATIVE_LINES,
                found: self.question.narrative.len(),
            });
        }
        if self.question.escalation.len() != ESCALATION_STEPS {
            return Err(CardError::EscalationLength {
                expected: ESCALATION_STEPS,
                found: self.question.escalation.len(),
            });
        }
        if !(0.0..=1.0).contains(&self.audio.volume) {
            return Err(CardError::InvalidVolume(self.audio.volume));
        }
        Ok(())
    }
}

thread_local! {
    static CONFIG: RefCell<Rc<CardConfig>> = RefCell::new(Rc::new(CardConfig::default()));
}

/// Read access to the active config.
pub fn with_config<F, R>(f: F) -> R
where
    F: FnOnce(&CardConfig) -> R,
{
    let config = CONFIG.with(|c| Rc::clone(&c.borrow()));
    f(&config)
}

/// Replace the active config.
pub fn install(config: CardConfig) {
    CONFIG.with(|c| {
        *c.borrow_mut() = Rc::new(config);
    });
}
