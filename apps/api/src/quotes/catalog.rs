use super::Quote;

/// The full quote catalog. Order is load-bearing: the daily selector indexes into it.
pub static CATALOG: [Quote; 45] = [
    Quote::new(
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    Quote::new(
        "Life is what happens to you while you're busy making other plans.",
        "John Lennon",
    ),
    Quote::new(
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    Quote::new(
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Winston Churchill",
    ),
    Quote::new(
        "The only impossible journey is the one you never begin.",
        "Tony Robbins",
    ),
    Quote::new(
        "In the middle of difficulty lies opportunity.",
        "Albert Einstein",
    ),
    Quote::new(
        "It does not matter how slowly you go as long as you do not stop.",
        "Confucius",
    ),
    Quote::new(
        "Believe you can and you're halfway there.",
        "Theodore Roosevelt",
    ),
    Quote::new(
        "The best way to predict the future is to create it.",
        "Peter Drucker",
    ),
    Quote::new(
        "Everything you've ever wanted is on the other side of fear.",
        "George Addair",
    ),
    Quote::new(
        "The secret of getting ahead is getting started.",
        "Mark Twain",
    ),
    Quote::new(
        "Don't watch the clock; do what it does. Keep going.",
        "Sam Levenson",
    ),
    Quote::new(
        "The only limit to our realization of tomorrow will be our doubts of today.",
        "Franklin D. Roosevelt",
    ),
    Quote::new(
        "Do what you can, with what you have, where you are.",
        "Theodore Roosevelt",
    ),
    Quote::new(
        "You are never too old to set another goal or to dream a new dream.",
        "C.S. Lewis",
    ),
    Quote::new(
        "The only way to achieve the impossible is to believe it is possible.",
        "Charles Kingsleigh",
    ),
    Quote::new(
        "Change your thoughts and you change your world.",
        "Norman Vincent Peale",
    ),
    Quote::new(
        "The journey of a thousand miles begins with one step.",
        "Lao Tzu",
    ),
    Quote::new(
        "What you get by achieving your goals is not as important as what you become by achieving your goals.",
        "Zig Ziglar",
    ),
    Quote::new(
        "Strive not to be a success, but rather to be of value.",
        "Albert Einstein",
    ),
    Quote::new(
        "I have not failed. I've just found 10,000 ways that won't work.",
        "Thomas A. Edison",
    ),
    Quote::new(
        "The mind is everything. What you think you become.",
        "Buddha",
    ),
    Quote::new(
        "The best time to plant a tree was 20 years ago. The second best time is now.",
        "Chinese Proverb",
    ),
    Quote::new(
        "Your time is limited, don't waste it living someone else's life.",
        "Steve Jobs",
    ),
    Quote::new(
        "Twenty years from now you will be more disappointed by the things that you didn't do than by the ones you did do.",
        "Mark Twain",
    ),
    Quote::new(
        "Success is not the key to happiness. Happiness is the key to success. If you love what you are doing, you will be successful.",
        "Albert Schweitzer",
    ),
    Quote::new(
        "The only person you are destined to become is the person you decide to be.",
        "Ralph Waldo Emerson",
    ),
    Quote::new(
        "Believe in yourself and all that you are. Know that there is something inside you that is greater than any obstacle.",
        "Christian D. Larson",
    ),
    Quote::new(
        "The greatest glory in living lies not in never falling, but in rising every time we fall.",
        "Nelson Mandela",
    ),
    Quote::new(
        "You miss 100% of the shots you don't take.",
        "Wayne Gretzky",
    ),
    Quote::new("The harder I work, the luckier I get.", "Samuel Goldwyn"),
    Quote::new(
        "Don't be afraid to give up the good to go for the great.",
        "John D. Rockefeller",
    ),
    Quote::new(
        "I find that the harder I work, the more luck I seem to have.",
        "Thomas Jefferson",
    ),
    Quote::new(
        "Success is walking from failure to failure with no loss of enthusiasm.",
        "Winston Churchill",
    ),
    Quote::new(
        "The only place where success comes before work is in the dictionary.",
        "Vidal Sassoon",
    ),
    Quote::new("Dream big and dare to fail.", "Norman Vaughan"),
    Quote::new("The power of imagination makes us infinite.", "John Muir"),
    Quote::new("Do or do not. There is no try.", "Yoda"),
    Quote::new(
        "Be the change you wish to see in the world.",
        "Mahatma Gandhi",
    ),
    Quote::new("Stay hungry, stay foolish.", "Steve Jobs"),
    Quote::new(
        "Simplicity is the ultimate sophistication.",
        "Leonardo da Vinci",
    ),
    Quote::new("Make each day your masterpiece.", "John Wooden"),
    Quote::new("The purpose of life is a life of purpose.", "Robert Byrne"),
    Quote::new(
        "To be the best, you must be able to handle the worst.",
        "Wilson Kanadi",
    ),
    Quote::new(
        "Life is 10% what happens to you and 90% how you react to it.",
        "Charles R. Swindoll",
    ),
];
