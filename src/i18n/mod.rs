//! Bilingual UI Strings
//! Indonesian/English string tables and lookup helpers

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Display language for every user-facing string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lang {
    /// Bahasa Indonesia (startup default)
    Id,
    /// English
    En,
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Id
    }
}

impl Lang {
    /// The other language, used by the toggle button.
    pub fn toggled(self) -> Lang {
        match self {
            Lang::Id => Lang::En,
            Lang::En => Lang::Id,
        }
    }

    /// Short code shown on the toggle button.
    pub fn code(self) -> &'static str {
        match self {
            Lang::Id => "ID",
            Lang::En => "EN",
        }
    }
}

/// A pair of translations for one piece of inline content.
///
/// Reference data (layers, protocols) embeds its bilingual text directly with
/// this type; keyed UI strings go through [`tr`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    pub id: &'static str,
    pub en: &'static str,
}

impl Text {
    pub fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Id => self.id,
            Lang::En => self.en,
        }
    }
}

/// Look up a UI string by key.
///
/// Unknown keys come back verbatim so a missing translation shows up on
/// screen as the key instead of failing the caller.
pub fn tr(key: &str, lang: Lang) -> &str {
    match TABLE.iter().find(|(k, _)| *k == key) {
        Some((_, text)) => text.get(lang),
        None => key,
    }
}

/// True when `key` has a real entry.
pub fn has_key(key: &str) -> bool {
    TABLE.iter().any(|(k, _)| *k == key)
}

const TABLE: &[(&str, Text)] = &[
    // --- Page chrome ---
    (
        "title_interactive",
        Text { id: "Interaktif", en: "Interactive" },
    ),
    (
        "subtitle",
        Text {
            id: "Perbandingan Model OSI & TCP/IP",
            en: "OSI & TCP/IP Model Comparison",
        },
    ),
    (
        "osi_header",
        Text { id: "Model OSI (7 Layer)", en: "OSI Model (7 Layers)" },
    ),
    (
        "tcp_header",
        Text { id: "Model TCP/IP (4 Layer)", en: "TCP/IP Model (4 Layers)" },
    ),
    (
        "flow_down",
        Text {
            id: "Kirim Data (Enkapsulasi)",
            en: "Send Data (Encapsulation)",
        },
    ),
    (
        "flow_up",
        Text {
            id: "Terima Data (Dekapsulasi)",
            en: "Receive Data (Decapsulation)",
        },
    ),
    (
        "welcome_title",
        Text { id: "Selamat Datang!", en: "Welcome!" },
    ),
    (
        "welcome_desc",
        Text {
            id: "Pilih sebuah layer untuk melihat detailnya.",
            en: "Click a layer to see its details.",
        },
    ),
    (
        "protocols_title",
        Text { id: "Protokol Utama", en: "Key Protocols" },
    ),
    (
        "common_ports",
        Text { id: "Port & Protokol Umum", en: "Common Ports & Protocols" },
    ),
    ("port_col_port", Text { id: "Port", en: "Port" }),
    ("port_col_service", Text { id: "Layanan", en: "Service" }),
    ("port_col_desc", Text { id: "Keterangan", en: "Description" }),
    (
        "layer_focus_msg",
        Text {
            id: "Layer ini berfokus pada proses, bukan port spesifik.",
            en: "This layer focuses on processes rather than specific ports.",
        },
    ),
    (
        "use_cases",
        Text { id: "Contoh Penggunaan:", en: "Use Cases:" },
    ),
    (
        "references",
        Text {
            id: "Referensi & Bacaan Lanjut",
            en: "References & Further Reading",
        },
    ),
    (
        "security_risks",
        Text { id: "Risiko Keamanan", en: "Security Risks" },
    ),
    (
        "security_mitigation",
        Text { id: "Mitigasi & Pengamanan", en: "Mitigation & Hardening" },
    ),
    (
        "sim_btn",
        Text {
            id: "Simulasi Pengiriman Data",
            en: "Data Transmission Simulation",
        },
    ),
    // --- Simulation chrome ---
    (
        "sim_title_ping",
        Text {
            id: "Simulasi Ping (ICMP Echo)",
            en: "Ping Simulation (ICMP Echo)",
        },
    ),
    (
        "sim_title_http",
        Text {
            id: "Simulasi HTTP Request",
            en: "HTTP Request Simulation",
        },
    ),
    ("sim_sender", Text { id: "Pengirim", en: "Sender" }),
    ("sim_receiver", Text { id: "Penerima", en: "Receiver" }),
    ("sim_client", Text { id: "Klien", en: "Client" }),
    ("sim_server", Text { id: "Server", en: "Server" }),
    ("sim_start", Text { id: "Mulai", en: "Start" }),
    ("sim_pause", Text { id: "Jeda", en: "Pause" }),
    ("sim_resume", Text { id: "Lanjut", en: "Resume" }),
    ("sim_reset", Text { id: "Ulang", en: "Reset" }),
    ("sim_speed", Text { id: "Kecepatan", en: "Speed" }),
    ("sim_close", Text { id: "Tutup", en: "Close" }),
    (
        "sim_desc_ping",
        Text {
            id: "Tekan Mulai untuk melihat perjalanan paket ICMP melewati 7 layer OSI.",
            en: "Press Start to watch an ICMP packet travel through the 7 OSI layers.",
        },
    ),
    (
        "sim_desc_http",
        Text {
            id: "Tekan Mulai untuk melihat siklus HTTP request-response antara klien dan server.",
            en: "Press Start to watch an HTTP request-response cycle between client and server.",
        },
    ),
    (
        "sim_wire_tx",
        Text {
            id: "Transmisi bit melalui media fisik...",
            en: "Transmitting bits over the physical medium...",
        },
    ),
    // --- Ping narration ---
    (
        "sim_ping_request",
        Text {
            id: "Mengirim ICMP Echo Request...",
            en: "Sending ICMP Echo Request...",
        },
    ),
    (
        "sim_ping_reply",
        Text {
            id: "Penerima membuat Echo Reply...",
            en: "The receiver builds an Echo Reply...",
        },
    ),
    (
        "sim_ping_complete",
        Text {
            id: "Ping selesai! Round-trip berhasil.",
            en: "Ping complete! Round trip successful.",
        },
    ),
    (
        "sim_ping_l7",
        Text {
            id: "Aplikasi ping menyiapkan pesan ICMP Echo.",
            en: "The ping utility prepares an ICMP Echo message.",
        },
    ),
    (
        "sim_ping_l6",
        Text {
            id: "Data diformat agar dapat dibaca sistem tujuan.",
            en: "Data is formatted so the destination system can read it.",
        },
    ),
    (
        "sim_ping_l5",
        Text {
            id: "Sesi komunikasi antar host dikelola.",
            en: "The communication session between hosts is managed.",
        },
    ),
    (
        "sim_ping_l4",
        Text {
            id: "Pesan diteruskan ke bawah (ICMP tidak memakai port).",
            en: "The message is handed down (ICMP does not use ports).",
        },
    ),
    (
        "sim_ping_l3",
        Text {
            id: "Header IP ditambahkan: alamat sumber & tujuan. Data menjadi Packet.",
            en: "An IP header is added: source & destination address. Data becomes a Packet.",
        },
    ),
    (
        "sim_ping_l2",
        Text {
            id: "MAC address & error check membungkus packet menjadi Frame.",
            en: "MAC addresses & error check wrap the packet into a Frame.",
        },
    ),
    (
        "sim_ping_l1",
        Text {
            id: "Frame diubah menjadi sinyal listrik/cahaya (bit).",
            en: "The frame becomes electrical/optical signals (bits).",
        },
    ),
    // --- HTTP narration ---
    (
        "sim_http_request",
        Text {
            id: "Browser mengirim HTTP GET Request...",
            en: "The browser sends an HTTP GET request...",
        },
    ),
    (
        "sim_http_response",
        Text {
            id: "Server mengirim respons 200 OK...",
            en: "The server sends a 200 OK response...",
        },
    ),
    (
        "sim_http_processing",
        Text {
            id: "Server memproses permintaan (mencari resource)...",
            en: "The server processes the request (locating the resource)...",
        },
    ),
    (
        "sim_http_complete",
        Text {
            id: "Halaman diterima! Browser merender HTML.",
            en: "Page received! The browser renders the HTML.",
        },
    ),
    (
        "sim_http_l7",
        Text {
            id: "Browser membuat pesan GET / untuk meminta halaman web.",
            en: "The browser creates a GET / message asking for a web page.",
        },
    ),
    (
        "sim_http_l6",
        Text {
            id: "Teks permintaan di-encode (mis. ASCII/TLS bila HTTPS).",
            en: "The request text is encoded (e.g. ASCII, TLS when HTTPS).",
        },
    ),
    (
        "sim_http_l5",
        Text {
            id: "Sesi dengan server web dibuka dan dikelola.",
            en: "A session with the web server is opened and managed.",
        },
    ),
    (
        "sim_http_l4",
        Text {
            id: "TCP menambahkan port (80/443) dan menjamin pengiriman. Data menjadi Segment.",
            en: "TCP adds ports (80/443) and guarantees delivery. Data becomes a Segment.",
        },
    ),
    (
        "sim_http_l3",
        Text {
            id: "Alamat IP server ditambahkan untuk routing. Data menjadi Packet.",
            en: "The server's IP address is added for routing. Data becomes a Packet.",
        },
    ),
    (
        "sim_http_l2",
        Text {
            id: "Frame dibentuk dengan MAC address hop berikutnya.",
            en: "A frame is built with the next hop's MAC address.",
        },
    ),
    (
        "sim_http_l1",
        Text {
            id: "Bit dikirim melalui kabel, fiber, atau Wi-Fi.",
            en: "Bits are transmitted over cable, fiber, or Wi-Fi.",
        },
    ),
];
