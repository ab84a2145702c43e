//! Canned-response chat bot.
//!
//! A fixed, ordered keyword table scanned linearly. The input is lower-cased
//! and the first entry with any keyword occurring as a substring wins. When
//! nothing matches the bot points the customer at WhatsApp.

use crate::whatsapp;

pub const NETFLIX_RESPONSE: &str = "Netflix Premium (4K UHD, private profile):\n\
• 1 Month: Rs. 599\n\
• 3 Months: Rs. 1,699\n\
Delivered within 10 minutes of payment via eSewa, Khalti or bank transfer.";

pub const SPOTIFY_RESPONSE: &str = "Spotify Premium Individual: Rs. 399 / month.\n\
We upgrade your own account, so your playlists stay as they are.";

pub const YOUTUBE_RESPONSE: &str = "YouTube Premium: Rs. 349 / month on your own Google account.\n\
Includes YouTube Music and background play.";

pub const PRIME_RESPONSE: &str = "Amazon Prime Video: Rs. 299 / month, HD on a private profile.";

pub const HOTSTAR_RESPONSE: &str = "Disney+ Hotstar Super: Rs. 449 / month.\n\
Live cricket, Disney and Marvel on two devices.";

pub const CANVA_RESPONSE: &str = "Canva Pro: Rs. 1,499 / year (50% off), activated on your own email.";

pub const CHATGPT_RESPONSE: &str = "ChatGPT Plus: Rs. 3,199 / month, activated on your own OpenAI account.";

pub const MICROSOFT_RESPONSE: &str = "Microsoft products:\n\
• Microsoft 365 Family: Rs. 2,499 / year\n\
• Windows 11 Pro license: Rs. 1,999 (lifetime)";

pub const VPN_RESPONSE: &str = "NordVPN Standard: Rs. 2,199 / year for up to six devices.";

pub const PAYMENT_RESPONSE: &str = "We accept eSewa, Khalti, IME Pay and bank transfer. \
Prices are listed on each product page in NPR.";

pub const DELIVERY_RESPONSE: &str = "Most orders are delivered within 10 to 30 minutes after payment \
confirmation, 9 AM to 10 PM every day.";

pub const GREETING_RESPONSE: &str = "Namaste! 👋 Ask me about Netflix, Spotify, YouTube Premium, \
Canva, ChatGPT or any other subscription.";

/// Ordered keyword table. Position is the tie-break when several keywords occur.
pub static KEYWORD_RESPONSES: &[(&[&str], &str)] = &[
    (&["netflix"], NETFLIX_RESPONSE),
    (&["spotify"], SPOTIFY_RESPONSE),
    (&["youtube"], YOUTUBE_RESPONSE),
    (&["prime", "amazon"], PRIME_RESPONSE),
    (&["hotstar", "disney"], HOTSTAR_RESPONSE),
    (&["canva"], CANVA_RESPONSE),
    (&["chatgpt", "openai"], CHATGPT_RESPONSE),
    (&["microsoft", "office", "windows"], MICROSOFT_RESPONSE),
    (&["vpn", "nord"], VPN_RESPONSE),
    (&["price", "payment", "esewa", "khalti", "pay"], PAYMENT_RESPONSE),
    (&["delivery", "deliver", "how long"], DELIVERY_RESPONSE),
    (&["hello", "hi", "namaste"], GREETING_RESPONSE),
];

/// Reply chosen for one customer message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotReply {
    pub text: String,
    /// The table keyword that matched, `None` for the fallback.
    pub keyword: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct ChatBot {
    fallback: String,
}

impl ChatBot {
    pub fn new(whatsapp_phone: &str) -> Self {
        let link = whatsapp::wa_me_link(
            whatsapp_phone,
            "Hello! I have a question about a subscription.",
        );
        Self {
            fallback: format!(
                "I'm not sure about that one. Message us on WhatsApp and a real person will reply: {}",
                link
            ),
        }
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn respond(&self, input: &str) -> BotReply {
        match match_keyword(input) {
            Some((keyword, text)) => BotReply {
                text: text.to_string(),
                keyword: Some(keyword),
            },
            None => BotReply {
                text: self.fallback.clone(),
                keyword: None,
            },
        }
    }
}

/// First `(keyword, response)` in table order whose keyword occurs in `input`.
pub fn match_keyword(input: &str) -> Option<(&'static str, &'static str)> {
    let lowered = input.to_lowercase();
    KEYWORD_RESPONSES.iter().find_map(|(keywords, response)| {
        keywords
            .iter()
            .find(|keyword| lowered.contains(*keyword))
            .map(|keyword| (*keyword, *response))
    })
}
