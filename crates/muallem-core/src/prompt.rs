//! Arabic prompt templates, one per generation feature. Structured
//! templates close with a JSON-only instruction and a shape example; the
//! extractor tolerates the replies that ignore it.

use crate::options::{GenerationOptions, Style};

pub const TEACHER_SYSTEM_PROMPT: &str = "أنت \"المعلم الذكي\" - مساعد تعليمي ذكي يتحدث العربية بطلاقة.

مهمتك:
- شرح المفاهيم بوضوح وبساطة
- الإجابة على الأسئلة المتعلقة بالمحتوى التعليمي
- تقديم أمثلة توضيحية
- مساعدة الطلاب في الفهم العميق

قواعد مهمة:
- استخدم اللغة العربية الفصحى السهلة
- أجب بناءً على المحتوى المتاح عندما يكون ذا صلة
- إذا لم يكن لديك معلومات كافية، اطلب توضيحاً
- كن ودوداً ومشجعاً
- قدم الاستشهادات عند الحاجة";

pub const PDF_EXTRACT: &str =
    "استخرج كل النص من هذا الملف PDF. حافظ على هيكل المحتوى والعناوين والفقرات.";

pub const IMAGE_EXTRACT: &str = "استخرج كل النص الموجود في هذه الصورة بالعربية أو بلغته الأصلية. إذا كانت الصورة تحتوي على رسوم بيانية أو جداول، صفها بوضوح.";

pub const AUDIO_TRANSCRIBE: &str = "انسخ هذا الملف الصوتي إلى نص. إذا كان باللغة العربية، اكتب النص بالعربية. إذا كان بلغة أخرى، اكتب النص بلغته الأصلية ثم ترجمه إلى العربية.";

pub fn chat(context: &str, message: &str) -> String {
    let mut full_context = TEACHER_SYSTEM_PROMPT.to_string();
    if context.trim().is_empty() {
        full_context.push_str("\n\nلا يوجد محتوى متاح حالياً.");
    } else {
        full_context.push_str(&format!("\n\nالمحتوى المتاح للرجوع إليه:\n{context}"));
    }
    format!("{full_context}\n\nسؤال المستخدم: {message}")
}

pub fn audio_script(content: &str, options: &GenerationOptions) -> String {
    format!(
        "اكتب نصاً للقراءة الصوتية (Audio Overview) باللغة العربية يلخص المحتوى التالي.

المتطلبات:
- اكتب بأسلوب {style}
- المستوى المستهدف: {level}
- الطول: {length}
- ابدأ بمقدمة جذابة
- قسّم المحتوى إلى أقسام واضحة
- اختم بخلاصة وأفكار رئيسية

المحتوى:
{content}

اكتب النص المناسب للقراءة الصوتية:",
        style = options.style.arabic(),
        level = options.level.arabic(),
        length = options.length.audio_arabic(),
    )
}

pub fn flashcards(content: &str, options: &GenerationOptions) -> String {
    format!(
        "أنشئ {count} بطاقة تعليمية (Flashcards) باللغة العربية من المحتوى التالي.

المتطلبات:
- المستوى: {level}
- كل بطاقة تحتوي على سؤال وجواب
- الأسئلة متنوعة (تعريفات، مفاهيم، تطبيقات)
- الإجابات واضحة ومختصرة

المحتوى:
{content}

أرجع النتيجة بصيغة JSON فقط (بدون أي نص إضافي):
{{\"flashcards\": [{{\"question\": \"السؤال\", \"answer\": \"الجواب\"}}]}}",
        count = options.length.flashcard_count(),
        level = options.level.arabic(),
    )
}

pub fn quiz(content: &str, options: &GenerationOptions) -> String {
    format!(
        "أنشئ اختباراً من {count} أسئلة باللغة العربية من المحتوى التالي.

المتطلبات:
- المستوى: {level}
- أنواع الأسئلة: اختيار من متعدد (4 خيارات)
- كل سؤال له إجابة صحيحة واحدة
- أضف شرحاً للإجابة الصحيحة

المحتوى:
{content}

أرجع النتيجة بصيغة JSON فقط (بدون أي نص إضافي):
{{\"quiz\": {{\"title\": \"عنوان الاختبار\", \"questions\": [{{\"question\": \"نص السؤال\", \"options\": [\"خيار 1\", \"خيار 2\", \"خيار 3\", \"خيار 4\"], \"correctIndex\": 0, \"explanation\": \"شرح الإجابة\"}}]}}}}",
        count = options.length.quiz_count(),
        level = options.level.arabic(),
    )
}

pub fn mindmap(content: &str) -> String {
    format!(
        "أنشئ خريطة ذهنية (Mind Map) باللغة العربية تلخص المحتوى التالي.

المتطلبات:
- موضوع رئيسي واحد
- 4-6 فروع رئيسية
- 2-4 فروع فرعية لكل فرع
- كلمات مفتاحية مختصرة

المحتوى:
{content}

أرجع النتيجة بصيغة JSON فقط (بدون أي نص إضافي):
{{\"mindmap\": {{\"title\": \"الموضوع الرئيسي\", \"branches\": [{{\"name\": \"الفرع الرئيسي\", \"children\": [{{\"name\": \"فرع فرعي 1\"}}, {{\"name\": \"فرع فرعي 2\"}}]}}]}}}}"
    )
}

pub fn report(content: &str, options: &GenerationOptions) -> String {
    format!(
        "اكتب تقريراً شاملاً باللغة العربية عن المحتوى التالي.

المتطلبات:
- الأسلوب: {style}
- المستوى: {level}
- الطول: {length}

الهيكل المطلوب:
1. ملخص تنفيذي
2. مقدمة
3. الأقسام الرئيسية (حسب المحتوى)
4. النقاط المهمة
5. الخلاصة والتوصيات

المحتوى:
{content}

اكتب التقرير بصيغة Markdown:",
        style = options.style.report_arabic(),
        level = options.level.arabic(),
        length = options.length.report_arabic(),
    )
}

pub fn slides(content: &str, options: &GenerationOptions) -> String {
    format!(
        "أنشئ محتوى عرض تقديمي من {count} شريحة باللغة العربية.

المتطلبات:
- المستوى: {level}
- نقاط مختصرة في كل شريحة (3-5 نقاط)
- ملاحظات للمتحدث لكل شريحة

المحتوى:
{content}

أرجع النتيجة بصيغة JSON فقط (بدون أي نص إضافي):
{{\"presentation\": {{\"title\": \"عنوان العرض\", \"slides\": [{{\"title\": \"عنوان الشريحة\", \"points\": [\"نقطة 1\", \"نقطة 2\"], \"speakerNotes\": \"ملاحظات للمتحدث\"}}]}}}}",
        count = options.length.slide_count(),
        level = options.level.arabic(),
    )
}

pub fn infographic(content: &str) -> String {
    format!(
        "أنشئ محتوى إنفوجرافيك باللغة العربية يلخص المحتوى التالي.

المتطلبات:
- عنوان جذاب
- 5-7 نقاط رئيسية مع أيقونات مقترحة
- إحصائيات أو أرقام مهمة (إن وجدت)
- خلاصة في جملة واحدة

المحتوى:
{content}

أرجع النتيجة بصيغة JSON فقط (بدون أي نص إضافي):
{{\"infographic\": {{\"title\": \"العنوان\", \"subtitle\": \"العنوان الفرعي\", \"points\": [{{\"icon\": \"📌\", \"title\": \"النقطة\", \"description\": \"الوصف\"}}], \"stats\": [{{\"value\": \"85%\", \"label\": \"الوصف\"}}], \"conclusion\": \"الخلاصة\"}}}}"
    )
}

pub fn video_script(content: &str, style: Style) -> String {
    format!(
        "اكتب نصاً للقراءة الصوتية (Video Overview) باللغة العربية يلخص المحتوى التالي.

المتطلبات:
- اكتب بأسلوب {style}
- ابدأ بمقدمة جذابة
- قسّم المحتوى إلى أقسام واضحة
- اختم بخلاصة وأفكار رئيسية

المحتوى:
{content}

اكتب النص:",
        style = style.arabic(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Length, Level};

    #[test]
    fn flashcards_prompt_carries_the_count_for_each_length() {
        let mut options = GenerationOptions::default();
        assert!(flashcards("المحتوى", &options).contains("أنشئ 20 بطاقة"));
        options.length = Length::Short;
        assert!(flashcards("المحتوى", &options).contains("أنشئ 10 بطاقة"));
        options.length = Length::Long;
        assert!(flashcards("المحتوى", &options).contains("أنشئ 30 بطاقة"));
    }

    #[test]
    fn quiz_prompt_embeds_count_and_level() {
        let options = GenerationOptions {
            level: Level::Advanced,
            length: Length::Long,
            ..Default::default()
        };
        let prompt = quiz("المحتوى", &options);
        assert!(prompt.contains("من 15 أسئلة"));
        assert!(prompt.contains("متقدم"));
        assert!(prompt.contains("\"quiz\""));
    }

    #[test]
    fn chat_prompt_includes_context_when_present() {
        let prompt = chat("درس الكسور", "ما هو الكسر؟");
        assert!(prompt.contains("المحتوى المتاح للرجوع إليه:\nدرس الكسور"));
        assert!(prompt.contains("سؤال المستخدم: ما هو الكسر؟"));
        assert!(prompt.starts_with(TEACHER_SYSTEM_PROMPT));
    }

    #[test]
    fn chat_prompt_notes_missing_context() {
        let prompt = chat("", "سؤال");
        assert!(prompt.contains("لا يوجد محتوى متاح حالياً."));
    }

    #[test]
    fn structured_prompts_name_their_top_level_key() {
        let options = GenerationOptions::default();
        assert!(flashcards("م", &options).contains("\"flashcards\""));
        assert!(mindmap("م").contains("\"mindmap\""));
        assert!(slides("م", &options).contains("\"presentation\""));
        assert!(infographic("م").contains("\"infographic\""));
    }
}
