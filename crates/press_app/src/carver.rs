//! Text of the principles sheet.

pub const TITLE: &str = "George Washington Carver Principles for Life & Work";

pub const PRINCIPLES_HEADING: &str = "Principles";

pub const REMINDER_HEADING: &str = "Carver's Reminder";

pub const PRINCIPLES_TEXT: &str = "\
1. Purpose Over Profit
   - Focus on service and solving real problems before seeking wealth.
   - Let your work benefit as many people as possible.

2. Faith as a Foundation
   - Begin each day with prayer, reflection, or meditation.
   - See your talents as gifts to steward, not possessions to hoard.

3. Lifelong Curiosity
   - Remain a student forever; explore new ideas without fear.
   - Value the process of discovery as much as the results.

4. Simplicity in Living
   - Live within your means and avoid unnecessary excess.
   - Use resources wisely and creatively.

5. Generosity of Knowledge
   - Share insights freely; empower others rather than guard secrets.
   - Mentor, teach, and guide those who come after you.

6. Persistence Through Obstacles
   - Overcome challenges with patience and creativity.
   - Remember: limitations can be the mother of invention.

7. Integrity in Work
   - Stay true to your values even when opportunities for quick gain arise.
   - Let quality and ethics be your reputation.

8. Service to Community
   - Align your skills with the needs of others.
   - Seek to leave your environment better than you found it.
";

pub const CARVER_QUOTE: &str = concat!(
    "“It is not the style of clothes one wears, neither the kind of automobile one drives, ",
    "nor the amount of money in the bank that counts. These mean nothing. ",
    "It is simply service that measures success.”"
);
