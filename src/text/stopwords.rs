use std::collections::HashSet;
use std::sync::LazyLock;

const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "can", "will", "just",
    "should", "now", "also", "must", "would", "could", "within", "across", "etc",
];

const RUSSIAN: &[&str] = &[
    "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то", "все", "она",
    "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по", "только", "ее",
    "мне", "было", "вот", "от", "меня", "еще", "нет", "о", "из", "ему", "теперь", "когда",
    "даже", "ну", "ли", "если", "уже", "или", "ни", "быть", "был", "него", "до", "вас",
    "нибудь", "опять", "уж", "вам", "ведь", "там", "потом", "себя", "ничего", "ей", "может",
    "они", "тут", "где", "есть", "надо", "ней", "для", "мы", "тебя", "их", "чем", "была",
    "сам", "чтоб", "без", "будто", "чего", "раз", "тоже", "себе", "под", "будет", "тогда",
    "кто", "этот", "того", "потому", "этого", "какой", "совсем", "ним", "здесь", "этом",
    "один", "почти", "мой", "тем", "чтобы", "нее", "сейчас", "были", "куда", "зачем", "всех",
    "никогда", "можно", "при", "наконец", "два", "об", "другой", "хоть", "после", "над",
    "больше", "тот", "через", "эти", "нас", "про", "всего", "них", "какая", "много", "разве",
    "три", "эту", "моя", "впрочем", "хорошо", "свою", "этой", "перед", "иногда", "лучше",
    "чуть", "том", "нельзя", "такой", "им", "более", "всегда", "конечно", "всю", "между",
];

/// Generic résumé/vacancy vocabulary that heuristics would otherwise pick up.
const DOMAIN: &[&str] = &[
    "опыт", "experience", "работа", "work", "разработка", "development", "создание",
    "creation", "внедрение", "implementation", "использование", "using", "знание",
    "knowledge", "умение", "ability", "навык", "skill", "требование", "requirement",
    "обязанность", "responsibility", "задача", "task", "проект", "project", "верим",
    "делать", "жизнь", "инструмент", "интеллект", "который", "легче", "помогает",
    "усиливает", "это", "агентов", "баз", "будут", "вакансии", "валюта", "векторизованных",
    "владельцев", "внедрить", "выполнять", "достаточно", "драгоценные", "задач", "задачу",
    "знаний", "конкретного", "которые", "лет", "металлы", "название", "обязательно", "опыта",
    "организация", "пайплайна", "полученного", "продуктов", "промышленное", "процесса",
    "процессе", "работу", "ранжирование", "реализация", "роли", "сильных", "слабых", "собой",
    "создания", "создать", "ставим", "сторон", "требования", "уровне", "цепочек", "часть",
    "эффективные", "нам", "наш",
];

/// Short connective words rejected before any heuristic runs.
const FUNCTION_WORDS: &[&str] = &["the", "and", "for", "with", "using", "use", "used"];

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ENGLISH
        .iter()
        .chain(RUSSIAN)
        .chain(DOMAIN)
        .chain(FUNCTION_WORDS)
        .copied()
        .collect()
});

/// Returns `true` for English/Russian stop-words, generic domain vocabulary and
/// the function-word blacklist. Expects a lower-cased token.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}
