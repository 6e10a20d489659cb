//! Prompt templates (Turkish locale).

use serde_json::{Value, json};
use tonlama_core::ToneLabel;

pub const REWRITE_SYSTEM_PROMPT: &str = "\
Sen, metinleri istenen ton ve üsluba dönüştüren profesyonel bir Türkçe metin yazarısın. \
Çıktı kurallarına kesinlikle uy. Font bilgisi yalnızca bir üslup hatırlatmasıdır; \
metni biçimlendirme.";

pub const CLASSIFY_SYSTEM_PROMPT: &str = "\
Sen, verilen metnin tonunu ve amacını analiz eden bir dilbilimcisin. \
Yalnızca verilen etiketlerden birini seç ve 0.0 ile 1.0 arasında puanla. \
Çıktıyı zorunlu JSON şemasına göre üret.";

pub fn build_rewrite_prompt(text: &str, tone: ToneLabel, font: &str) -> String {
    let tone = tone.turkish();
    format!(
        "Kullanıcının metni: \"{text}\"\n\
         \n\
         Görev: Bu metni aşağıdaki kurallara ve '{tone}' üslubuna uygun olarak yeniden yaz.\n\
         \n\
         KURALLAR:\n\
         1. Ton: '{tone}' üslubunu mutlaka yansıt.\n\
         2. Argo/kaba içerik: Orijinal metin argo veya kaba ise, bunu olabilecek en kibar, \
         nötr ve mesafeli ifadeyle değiştir.\n\
         3. Çıktı biçimi: Başına veya sonuna açıklama, giriş ya da kapanış cümlesi ekleme. \
         Yalnızca dönüştürülmüş metni ver.\n\
         4. Font: {font} fontunun kullanıldığını hayal et."
    )
}

pub fn build_classify_prompt(text: &str) -> String {
    let labels: Vec<&str> = ToneLabel::TONES.iter().map(|l| l.turkish()).collect();
    format!(
        "Aşağıdaki metnin en uygun ton/stil etiketini belirle.\n\
         Metin: \"{text}\"\n\
         Etiketler: {}",
        labels.join(", ")
    )
}

/// JSON schema for `{label, score}` classification output.
pub fn classification_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "label": {"type": "STRING", "description": "Metne en uygun etiket."},
            "score": {"type": "NUMBER", "description": "Etiketin uygunluk puanı (0.0 ile 1.0 arası)."}
        },
        "propertyOrdering": ["label", "score"]
    })
}
