// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use quad_utils::id_string;

id_string!(
    /// The backend-assigned identifier of a room.
    RoomId
);

id_string!(
    /// The identifier of a user account.
    UserId
);

id_string!(
    /// The backend-assigned identifier of a message.
    MessageId
);

id_string!(
    /// A client-generated correlation id attached to an outgoing message. The gateway echoes it
    /// back on the authoritative record so that the provisional entry can be replaced in place.
    MessageLocalId
);

id_string!(AttachmentId);

id_string!(
    /// The identifier of a society a room can be linked to.
    SocietyId
);
